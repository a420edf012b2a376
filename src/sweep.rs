//! Linear-sweep decoding of a whole buffer, with an optional parallel variant

use std::ops::Range;
use std::time::Instant;

use rayon::prelude::*;

use crate::decoder::CapstoneDecoder;
use crate::raw::ByteDecoder;
use crate::session::{MachineMode, Session};
use crate::{Address, Error, Instruction, MAX_INSTRUCTION_SIZE};

/// Maximum chunk size for parallel processing
const CHUNK_SIZE: usize = 4096;

/// Instructions recovered from a buffer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Sweep {
    /// Decoded instructions in address order
    pub instructions: Vec<Instruction>,
    /// Bytes stepped over because nothing decoded there
    pub skipped: usize,
}

/// Decode `image` front to back, placing its first byte at `base`.
///
/// On a decode failure the sweep moves one byte forward and tries again.
pub fn linear<D: ByteDecoder>(session: &Session<D>, image: &[u8], base: Address) -> Sweep {
    let start_time = Instant::now();
    let sweep = sweep_range(session, image, base, 0..image.len());

    log::debug!(
        "Linear sweep of {} bytes: {} instructions, {} bytes skipped in {:?}",
        image.len(),
        sweep.instructions.len(),
        sweep.skipped,
        start_time.elapsed()
    );
    sweep
}

/// Linear sweep split across rayon workers, each with its own session.
///
/// Every chunk start is treated as an instruction boundary. An instruction
/// straddling a chunk edge is kept by the chunk it starts in, and the next
/// chunk may decode a second instruction from its tail bytes.
pub fn parallel(image: &[u8], base: Address, mode: MachineMode) -> Result<Sweep, Error> {
    let start_time = Instant::now();
    if image.is_empty() {
        return Ok(Sweep::default());
    }

    let num_chunks = image.len().div_ceil(CHUNK_SIZE);
    log::debug!("Processing {} bytes in {} chunks", image.len(), num_chunks);

    let chunk_results: Vec<Result<Sweep, Error>> = (0..num_chunks)
        .into_par_iter()
        .map_init(
            || CapstoneDecoder::new(mode).map(Session::with_decoder),
            |session, chunk_idx| -> Result<Sweep, Error> {
                let session = session.as_ref().map_err(|e| Error::Backend(e.clone()))?;
                let chunk_start = chunk_idx * CHUNK_SIZE;
                let chunk_end = (chunk_start + CHUNK_SIZE).min(image.len());
                Ok(sweep_range(session, image, base, chunk_start..chunk_end))
            },
        )
        .collect();

    let mut all = Sweep::default();
    for chunk in chunk_results {
        let chunk = chunk?;
        all.instructions.extend(chunk.instructions);
        all.skipped += chunk.skipped;
    }
    all.instructions.sort_by_key(|insn| insn.address.wrapping_sub(base));

    log::debug!(
        "Parallel sweep completed in {:?}: {} instructions",
        start_time.elapsed(),
        all.instructions.len()
    );
    Ok(all)
}

/// Sweep the instruction starts in `range`.
///
/// Instructions starting near the end of the range may run up to
/// `MAX_INSTRUCTION_SIZE` bytes past it; the next chunk starts fresh at its own
/// first byte.
fn sweep_range<D: ByteDecoder>(
    session: &Session<D>,
    image: &[u8],
    base: Address,
    range: Range<usize>,
) -> Sweep {
    let window_end = (range.end + MAX_INSTRUCTION_SIZE).min(image.len());
    let mut sweep = Sweep::default();
    let mut at = range.start;

    while at < range.end {
        let address = base.wrapping_add(at as Address);
        match session.decode(&image[at..window_end], address) {
            Ok(insn) => {
                at += insn.size as usize;
                sweep.instructions.push(insn);
            }
            Err(_) => {
                log::trace!("Nothing decodes at 0x{:x}, skipping a byte", address);
                at += 1;
                sweep.skipped += 1;
            }
        }
    }
    sweep
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Mnemonic;

    #[test]
    fn test_linear_sweep() {
        // nop; nop; ret
        let bytes = [0x90, 0x90, 0xc3];
        let session = Session::with_mode(MachineMode::Long64).unwrap();

        let sweep = linear(&session, &bytes, 0x1000);
        let mnemonics: Vec<_> = sweep.instructions.iter().map(|i| i.mnemonic).collect();
        assert_eq!(mnemonics, vec![Mnemonic::Nop, Mnemonic::Nop, Mnemonic::Ret]);
        let addresses: Vec<_> = sweep.instructions.iter().map(|i| i.address).collect();
        assert_eq!(addresses, vec![0x1000, 0x1001, 0x1002]);
        assert_eq!(sweep.skipped, 0);
    }

    #[test]
    fn test_linear_sweep_resynchronizes() {
        // a truncated call, then a nop
        let bytes = [0x90, 0xe8, 0x00];
        let session = Session::with_mode(MachineMode::Long64).unwrap();

        let sweep = linear(&session, &bytes, 0);
        assert_eq!(sweep.instructions.len(), 1);
        assert_eq!(sweep.skipped, 2);
    }

    #[test]
    fn test_empty_image() {
        let session = Session::with_mode(MachineMode::Long64).unwrap();
        assert_eq!(linear(&session, &[], 0), Sweep::default());
        assert_eq!(parallel(&[], 0, MachineMode::Long64).unwrap(), Sweep::default());
    }

    #[test]
    fn test_parallel_matches_linear_on_nop_sled() {
        let bytes = vec![0x90u8; CHUNK_SIZE * 3 + 17];
        let session = Session::with_mode(MachineMode::Long64).unwrap();

        let sequential = linear(&session, &bytes, 0x40_0000);
        let chunked = parallel(&bytes, 0x40_0000, MachineMode::Long64).unwrap();
        assert_eq!(chunked.instructions.len(), bytes.len());
        assert_eq!(chunked, sequential);
    }

    #[test]
    fn test_parallel_instruction_straddling_chunk_edge() {
        // mov eax, 0x90909090 starting two bytes before the first chunk edge
        let mut bytes = vec![0x90u8; CHUNK_SIZE * 2];
        bytes[CHUNK_SIZE - 2] = 0xb8;
        let base: Address = 0x1000;
        let edge = base + CHUNK_SIZE as Address;
        let session = Session::with_mode(MachineMode::Long64).unwrap();

        let sequential = linear(&session, &bytes, base);
        let chunked = parallel(&bytes, base, MachineMode::Long64).unwrap();

        // the chunk the mov starts in keeps all of it
        let mov = chunked
            .instructions
            .iter()
            .find(|insn| insn.mnemonic == Mnemonic::Mov)
            .unwrap();
        assert_eq!(mov.address, edge - 2);
        assert_eq!(mov.size, 5);

        // the next chunk resynchronizes at its own first byte, inside the mov
        let addresses = |sweep: &Sweep| -> Vec<Address> {
            sweep.instructions.iter().map(|insn| insn.address).collect()
        };
        let sequential_addrs = addresses(&sequential);
        let chunked_addrs = addresses(&chunked);
        for address in edge..edge + 3 {
            assert!(chunked_addrs.contains(&address));
            assert!(!sequential_addrs.contains(&address));
        }
        assert_eq!(chunked.instructions.len(), sequential.instructions.len() + 3);
        assert!(chunked_addrs.windows(2).all(|pair| pair[0] < pair[1]));
        assert_eq!(chunked.skipped, 0);
    }
}
