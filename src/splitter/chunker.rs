use crate::chunk_size::ByteCount;

/// Where one output part sits in the input file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PartSpan {
    pub index: u64,
    pub offset: u64,
    pub size: u64,
}

/// Number of parts needed to cover `file_size` bytes, rounding up.
pub fn part_count(file_size: u64, chunk: ByteCount) -> u64 {
    file_size.div_ceil(chunk.get())
}

/// Lay out the parts of a file of `file_size` bytes, in index order.
pub fn plan_parts(file_size: u64, chunk: ByteCount) -> impl Iterator<Item = PartSpan> {
    let count = part_count(file_size, chunk);
    let chunk = chunk.get();
    (0..count).map(move |index| {
        let offset = index * chunk;
        PartSpan {
            index,
            offset,
            size: chunk.min(file_size - offset),
        }
    })
}
