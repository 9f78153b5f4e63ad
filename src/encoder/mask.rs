//! Mask application and penalty scoring
use std::str::FromStr;

use rayon::prelude::*;

use crate::encoder::format::FormatInfo;
use crate::encoder::tables::ECC_LEVEL;
use crate::error::EncodeError;
use crate::models::{BitMatrix, MaskPattern, ModuleMatrix};

const N1: usize = 3;
const N2: usize = 3;
const N3: usize = 40;
const N4: usize = 10;

const FINDER_LIKE: [bool; 7] = [true, false, true, true, true, false, true];

/// Which penalty function ranks the mask trials
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PenaltyRules {
    /// All four ISO/IEC 18004 rules: runs, 2x2 blocks, finder-like
    /// sequences and dark/light balance in whole 5% steps
    #[default]
    Iso,
    /// Runs plus a real-valued balance term only
    Reduced,
}

impl FromStr for PenaltyRules {
    type Err = EncodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "iso" => Ok(PenaltyRules::Iso),
            "reduced" => Ok(PenaltyRules::Reduced),
            other => Err(EncodeError::InvalidConfig(format!(
                "unknown penalty rules '{}' (expected iso or reduced)",
                other
            ))),
        }
    }
}

/// Score of one mask trial
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MaskResult {
    /// Mask that was tried
    pub mask: MaskPattern,
    /// Total penalty, lower is better
    pub score: f64,
}

/// XOR `mask` into every non-reserved module
pub fn apply_mask(matrix: &mut ModuleMatrix, mask: MaskPattern) {
    let size = matrix.size();
    for y in 0..size {
        for x in 0..size {
            if !matrix.is_reserved(x, y) && mask.is_masked(y, x) {
                matrix.toggle(x, y);
            }
        }
    }
}

/// Total penalty of a finished grid under `rules`
pub fn penalty_score(modules: &BitMatrix, rules: PenaltyRules) -> f64 {
    let rows = modules.rows();
    let columns: Vec<Vec<bool>> = (0..modules.width())
        .map(|x| (0..modules.height()).map(|y| modules.get(x, y)).collect())
        .collect();
    let lines = rows.iter().chain(columns.iter());

    match rules {
        PenaltyRules::Iso => {
            let mut score = 0usize;
            for line in lines {
                score += run_penalty(line) + finder_like_penalty(line);
            }
            score += block_penalty(modules);
            score += balance_steps(modules) * N4;
            score as f64
        }
        PenaltyRules::Reduced => {
            let runs: usize = lines.map(|line| run_penalty(line)).sum();
            let total = (modules.width() * modules.height()).max(1) as f64;
            let dark_percent = modules.count_ones() as f64 * 100.0 / total;
            runs as f64 + 10.0 * (dark_percent - 50.0).abs() / 5.0
        }
    }
}

/// Each run of five or more same-colored modules: 3, plus 1 per extra module
fn run_penalty(line: &[bool]) -> usize {
    let mut penalty = 0;
    let mut run = 0;
    let mut prev = None;
    for &module in line {
        if prev == Some(module) {
            run += 1;
        } else {
            penalty += run_score(run);
            run = 1;
            prev = Some(module);
        }
    }
    penalty + run_score(run)
}

fn run_score(run: usize) -> usize {
    if run >= 5 { N1 + (run - 5) } else { 0 }
}

/// Every 2x2 block of one color
fn block_penalty(modules: &BitMatrix) -> usize {
    let (w, h) = (modules.width(), modules.height());
    let mut count = 0;
    for y in 0..h.saturating_sub(1) {
        for x in 0..w.saturating_sub(1) {
            let c = modules.get(x, y);
            if modules.get(x + 1, y) == c
                && modules.get(x, y + 1) == c
                && modules.get(x + 1, y + 1) == c
            {
                count += 1;
            }
        }
    }
    count * N2
}

/// 1:1:3:1:1 dark-light sequences with four light modules on at least one
/// side. Positions outside the line read as light.
fn finder_like_penalty(line: &[bool]) -> usize {
    if line.len() < FINDER_LIKE.len() {
        return 0;
    }
    let light_span = |start: isize| {
        (start..start + 4).all(|i| i < 0 || i as usize >= line.len() || !line[i as usize])
    };
    let mut count = 0;
    for start in 0..=line.len() - FINDER_LIKE.len() {
        if line[start..start + FINDER_LIKE.len()] != FINDER_LIKE {
            continue;
        }
        let before = light_span(start as isize - 4);
        let after = light_span((start + FINDER_LIKE.len()) as isize);
        if before || after {
            count += 1;
        }
    }
    count * N3
}

/// Whole 5% steps the dark ratio deviates from one half
fn balance_steps(modules: &BitMatrix) -> usize {
    let total = modules.width() * modules.height();
    if total == 0 {
        return 0;
    }
    let dark = modules.count_ones();
    (dark * 2).abs_diff(total) * 10 / total
}

/// Runs the eight mask trials and picks the winner
#[derive(Debug, Clone, Copy)]
pub struct MaskEvaluator {
    rules: PenaltyRules,
    parallel: bool,
}

impl MaskEvaluator {
    /// Evaluator scoring with `rules`, optionally on the rayon pool
    pub fn new(rules: PenaltyRules, parallel: bool) -> Self {
        Self { rules, parallel }
    }

    /// Score `mask` on a masked copy; `matrix` is not touched.
    ///
    /// Under [`PenaltyRules::Iso`] the trial also carries its format
    /// information, so the score is that of the finished symbol.
    pub fn evaluate(&self, matrix: &ModuleMatrix, mask: MaskPattern) -> MaskResult {
        let mut trial = matrix.clone();
        apply_mask(&mut trial, mask);
        if self.rules == PenaltyRules::Iso {
            FormatInfo::new(ECC_LEVEL, mask).write(&mut trial);
        }
        MaskResult {
            mask,
            score: penalty_score(trial.modules(), self.rules),
        }
    }

    /// All eight trials, in mask index order
    pub fn score_all(&self, matrix: &ModuleMatrix) -> Vec<MaskResult> {
        if self.parallel {
            MaskPattern::ALL
                .par_iter()
                .map(|&mask| self.evaluate(matrix, mask))
                .collect()
        } else {
            MaskPattern::ALL
                .iter()
                .map(|&mask| self.evaluate(matrix, mask))
                .collect()
        }
    }

    /// Lowest score wins; ties go to the lowest mask index
    pub fn select_best_mask(&self, matrix: &ModuleMatrix) -> MaskResult {
        let results = self.score_all(matrix);
        let mut best = results[0];
        for result in &results[1..] {
            if result.score < best.score {
                best = *result;
            }
        }
        best
    }
}

impl Default for MaskEvaluator {
    fn default() -> Self {
        Self::new(PenaltyRules::Iso, true)
    }
}
