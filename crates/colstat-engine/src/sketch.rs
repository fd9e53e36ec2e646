//! Approximate distinct-count sketch for wide composite collectors (§4.B,
//! §5). A small fixed-size HyperLogLog variant: once a composite collector
//! crosses `compositeSketchThreshold` distinct tuples, it stops growing an
//! exact set and folds further observations into this instead. Exactness is
//! never promised above the threshold — only that the estimate stays
//! finite and non-decreasing-ish, which is all the contract in §5 requires.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use colstat_core::Value;

const PRECISION: u32 = 10; // 2^10 = 1024 registers
const NUM_REGISTERS: usize = 1 << PRECISION;

pub struct DistinctSketch {
    registers: Vec<u8>,
}

impl DistinctSketch {
    pub fn new() -> Self {
        Self {
            registers: vec![0u8; NUM_REGISTERS],
        }
    }

    pub fn observe_tuple(&mut self, tuple: &[Value]) {
        let mut hasher = DefaultHasher::new();
        tuple.hash(&mut hasher);
        let h = hasher.finish();
        self.observe_hash(h);
    }

    fn observe_hash(&mut self, h: u64) {
        let idx = (h & (NUM_REGISTERS as u64 - 1)) as usize;
        let rest = h >> PRECISION;
        // Rank = position of the leftmost 1 bit in the remaining bits, 1-based.
        let rank = if rest == 0 {
            (64 - PRECISION) as u8 + 1
        } else {
            (rest.leading_zeros() - PRECISION) as u8 + 1
        };
        if rank > self.registers[idx] {
            self.registers[idx] = rank;
        }
    }

    pub fn estimate(&self) -> u64 {
        let m = NUM_REGISTERS as f64;
        let alpha = 0.7213 / (1.0 + 1.079 / m);
        let sum_inv: f64 = self.registers.iter().map(|&r| 2f64.powi(-(r as i32))).sum();
        let raw = alpha * m * m / sum_inv;

        let zero_registers = self.registers.iter().filter(|&&r| r == 0).count();
        let estimate = if raw <= 2.5 * m && zero_registers > 0 {
            // Small-range correction (linear counting).
            m * (m / zero_registers as f64).ln()
        } else {
            raw
        };

        estimate.round().max(0.0) as u64
    }
}

impl Default for DistinctSketch {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn estimate_is_in_the_right_order_of_magnitude() {
        let mut sk = DistinctSketch::new();
        let n = 10_000;
        for i in 0..n {
            sk.observe_tuple(&[Value::I64(i)]);
        }
        let est = sk.estimate() as f64;
        // HLL at p=10 has ~3% typical error; allow generous slack.
        assert!(est > n as f64 * 0.7 && est < n as f64 * 1.3, "estimate={est}");
    }

    #[test]
    fn repeated_values_do_not_inflate_estimate() {
        let mut sk = DistinctSketch::new();
        for _ in 0..1000 {
            sk.observe_tuple(&[Value::I64(42)]);
        }
        assert!(sk.estimate() <= 5);
    }
}
