//! Zobrist keys for repetition detection.
//!
//! A position hashes to the XOR of one key per occupied (color, kind, square),
//! plus keys for Black to move, each live castling right and the en-passant
//! file. Keys come from a fixed-seed generator evaluated at compile time, so
//! hashes are stable across runs.

use crate::{board::Position, types::*};

pub struct ZobristKeys {
    /// Indexed by [color][piece_kind][square]
    pub pieces: [[[u64; 64]; 6]; 2],
    pub black_to_move: u64,
    /// [wk, wq, bk, bq]
    pub castling: [u64; 4],
    pub en_passant_file: [u64; 8],
}

/// splitmix64 step: returns (next_state, output).
const fn splitmix64(state: u64) -> (u64, u64) {
    let state = state.wrapping_add(0x9E37_79B9_7F4A_7C15);
    let mut z = state;
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    (state, z ^ (z >> 31))
}

impl ZobristKeys {
    pub const fn new(seed: u64) -> Self {
        let mut state = seed;
        let mut pieces = [[[0u64; 64]; 6]; 2];
        let mut c = 0;
        while c < 2 {
            let mut k = 0;
            while k < 6 {
                let mut s = 0;
                while s < 64 {
                    let (next, key) = splitmix64(state);
                    state = next;
                    pieces[c][k][s] = key;
                    s += 1;
                }
                k += 1;
            }
            c += 1;
        }

        let (next, black_to_move) = splitmix64(state);
        state = next;

        let mut castling = [0u64; 4];
        let mut i = 0;
        while i < 4 {
            let (next, key) = splitmix64(state);
            state = next;
            castling[i] = key;
            i += 1;
        }

        let mut en_passant_file = [0u64; 8];
        let mut i = 0;
        while i < 8 {
            let (next, key) = splitmix64(state);
            state = next;
            en_passant_file[i] = key;
            i += 1;
        }

        ZobristKeys {
            pieces,
            black_to_move,
            castling,
            en_passant_file,
        }
    }

    #[inline]
    pub fn piece_key(&self, piece: Piece, sq: u8) -> u64 {
        self.pieces[piece.color.idx()][piece.kind.idx()][sq as usize]
    }

    pub fn hash(&self, pos: &Position) -> u64 {
        let mut h = pos
            .pieces()
            .fold(0u64, |h, (s, pc)| h ^ self.piece_key(pc, s));
        if pos.side_to_move == Color::Black {
            h ^= self.black_to_move;
        }
        let c = pos.castling;
        for (i, live) in [c.wk, c.wq, c.bk, c.bq].into_iter().enumerate() {
            if live {
                h ^= self.castling[i];
            }
        }
        if let Some(ep) = pos.en_passant {
            h ^= self.en_passant_file[file_of(ep) as usize];
        }
        h
    }
}

pub static ZOBRIST: ZobristKeys = ZobristKeys::new(0x5EED_C0DE_1234_ABCD);

#[cfg(test)]
#[path = "zobrist_tests.rs"]
mod zobrist_tests;
