//! Clusters parsed files into logical video works.

use std::collections::HashMap;

use tracing::trace;

use crate::options::NamingOptions;
use crate::types::{ExtraType, Grouping, ParsedVideo, VideoGroup};

/// How a cluster's primary files stack together.
enum Stacked {
    /// No primary files in the cluster.
    Empty,
    /// A single file, or a complete multi-part run sorted by part index.
    /// `seq` is the listing position of the canonical file.
    Run { seq: usize, files: Vec<ParsedVideo> },
    /// Two or more files whose part indices are missing or collide.
    Ambiguous(Vec<(usize, ParsedVideo)>),
}

/// Groups parsed candidate files into logical works.
///
/// Clustering is keyed on the normalized title plus year. Groups come out
/// ordered by the first appearance of their canonical file in `parsed`,
/// so the outcome is independent of how the caller's directory listing
/// happened to be ordered. The pass never fails: a file that fits nowhere
/// lands in [`Grouping::unclaimed`].
#[must_use]
pub fn group_videos(parsed: Vec<ParsedVideo>, options: &NamingOptions) -> Grouping {
    let mut primary_buckets: Vec<Vec<(usize, ParsedVideo)>> = Vec::new();
    let mut primary_slots: HashMap<(String, Option<u16>), usize> = HashMap::new();
    let mut extra_buckets: Vec<Vec<(usize, ParsedVideo)>> = Vec::new();
    let mut extra_slots: HashMap<(String, Option<u16>, ExtraType), usize> = HashMap::new();

    // Bucket in listing order; the seq carried with each file keeps the
    // final ordering independent of hash iteration order.
    for (seq, file) in parsed.into_iter().enumerate() {
        if let Some(extra) = file.extra_type {
            let slot = *extra_slots
                .entry((file.normalized_title(), file.year, extra))
                .or_insert_with(|| {
                    extra_buckets.push(Vec::new());
                    extra_buckets.len() - 1
                });
            extra_buckets[slot].push((seq, file));
        } else {
            let slot = *primary_slots
                .entry((file.normalized_title(), file.year))
                .or_insert_with(|| {
                    primary_buckets.push(Vec::new());
                    primary_buckets.len() - 1
                });
            primary_buckets[slot].push((seq, file));
        }
    }

    let mut sequenced: Vec<(usize, VideoGroup)> = Vec::new();
    let mut unclaimed: Vec<(usize, ParsedVideo)> = Vec::new();

    for bucket in primary_buckets {
        resolve_cluster(bucket, options.support_multi_edition, &mut sequenced);
    }

    // A lone extra is not worth a group of its own; it falls through to
    // the caller as an unclaimed file.
    for mut bucket in extra_buckets {
        if bucket.len() == 1 {
            unclaimed.push(bucket.remove(0));
        } else {
            let (seq, canonical) = bucket.remove(0);
            let mut group = VideoGroup::new(canonical);
            group.files.extend(bucket.into_iter().map(|(_, file)| file));
            sequenced.push((seq, group));
        }
    }

    sequenced.sort_by_key(|(seq, _)| *seq);
    unclaimed.sort_by_key(|(seq, _)| *seq);

    Grouping {
        groups: sequenced.into_iter().map(|(_, group)| group).collect(),
        unclaimed: unclaimed.into_iter().map(|(_, file)| file).collect(),
    }
}

/// Turns one primary cluster into groups.
fn resolve_cluster(
    bucket: Vec<(usize, ParsedVideo)>,
    multi_edition: bool,
    output: &mut Vec<(usize, VideoGroup)>,
) {
    let (editions, plain): (Vec<_>, Vec<_>) = bucket
        .into_iter()
        .partition(|(_, file)| file.edition.is_some());

    match stack_parts(plain) {
        Stacked::Run { seq, files } => {
            let mut files = files.into_iter();
            if let Some(canonical) = files.next() {
                let mut group = VideoGroup::new(canonical);
                group.files.extend(files);
                if multi_edition {
                    group
                        .alternate_versions
                        .extend(editions.into_iter().map(|(_, file)| file));
                    output.push((seq, group));
                } else {
                    output.push((seq, group));
                    standalone(editions, output);
                }
            }
        }
        Stacked::Ambiguous(mut plain) => {
            if multi_edition {
                trace!(
                    title = %plain[0].1.title,
                    files = plain.len(),
                    "part ordering ambiguous; keeping files as alternate versions"
                );
                let (seq, canonical) = plain.remove(0);
                let mut group = VideoGroup::new(canonical);
                group
                    .alternate_versions
                    .extend(plain.into_iter().map(|(_, file)| file));
                group
                    .alternate_versions
                    .extend(editions.into_iter().map(|(_, file)| file));
                output.push((seq, group));
            } else {
                standalone(plain, output);
                standalone(editions, output);
            }
        }
        Stacked::Empty => {
            if multi_edition {
                // Editions only; the earliest-listed label becomes the
                // canonical file.
                let mut editions = editions.into_iter();
                if let Some((seq, canonical)) = editions.next() {
                    let mut group = VideoGroup::new(canonical);
                    group
                        .alternate_versions
                        .extend(editions.map(|(_, file)| file));
                    output.push((seq, group));
                }
            } else {
                standalone(editions, output);
            }
        }
    }
}

/// Emits every file as its own single-file group.
fn standalone(files: Vec<(usize, ParsedVideo)>, output: &mut Vec<(usize, VideoGroup)>) {
    for (seq, file) in files {
        output.push((seq, VideoGroup::new(file)));
    }
}

/// Decides whether a cluster's primary files form an ordered multi-part
/// run.
fn stack_parts(mut plain: Vec<(usize, ParsedVideo)>) -> Stacked {
    if plain.is_empty() {
        return Stacked::Empty;
    }
    if plain.len() == 1 {
        let (seq, file) = plain.remove(0);
        return Stacked::Run {
            seq,
            files: vec![file],
        };
    }

    let all_indexed = plain.iter().all(|(_, file)| file.part.is_some());
    let mut indices: Vec<u32> = plain.iter().filter_map(|(_, file)| file.part).collect();
    indices.sort_unstable();
    indices.dedup();

    if all_indexed && indices.len() == plain.len() {
        plain.sort_by_key(|(_, file)| file.part);
        let seq = plain[0].0;
        Stacked::Run {
            seq,
            files: plain.into_iter().map(|(_, file)| file).collect(),
        }
    } else {
        Stacked::Ambiguous(plain)
    }
}
