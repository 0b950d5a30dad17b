use crate::model::SourceKind;

/// Verdict of a per-row transform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Row<T> {
    /// Row produced a record.
    Keep(T),
    /// Row carries no data (blank line, comment, header). Dropped silently.
    Ignore,
    /// Row is malformed. Dropped with a warning naming the reason.
    Skip(String),
}

/// Fold numbered rows through `transform`, keeping records in input order.
///
/// Malformed rows never abort the fold; each one is logged against `source`
/// and its line number, and the fold moves on.
pub fn fold_rows<R, T, I, F>(source: SourceKind, rows: I, mut transform: F) -> Vec<T>
where
    I: IntoIterator<Item = (usize, R)>,
    F: FnMut(R) -> Row<T>,
{
    let mut kept = Vec::new();
    let mut skipped = 0usize;

    for (line, row) in rows {
        match transform(row) {
            Row::Keep(record) => kept.push(record),
            Row::Ignore => {}
            Row::Skip(reason) => {
                skipped += 1;
                log::warn!("{source}, line {line}: {reason}; skipping");
            }
        }
    }

    log::debug!("parsed {source}: {} record(s), {skipped} skipped", kept.len());
    kept
}

/// Lines of `content` numbered from 1, split on `\n` or `\r\n`.
pub fn numbered_lines(content: &str) -> impl Iterator<Item = (usize, &str)> {
    content.lines().enumerate().map(|(i, line)| (i + 1, line))
}
