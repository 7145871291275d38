//! Gesture scripts: `row:dx,dx,...;row:dx,...`
//!
//! Each gesture names an inbox row and the horizontal translations of its
//! drag frames. The last translation is where the finger lifts.

use anyhow::{bail, Context, Result};

pub const DEFAULT_SCRIPT: &str = "0:20,50,85;1:-15,-45,-60;2:-30,-70,-95;1:10,45,90";

#[derive(Debug, Clone, PartialEq)]
pub struct Gesture {
    pub row: usize,
    pub frames: Vec<f32>,
}

impl Gesture {
    pub fn release_dx(&self) -> f32 {
        self.frames.last().copied().unwrap_or(0.0)
    }
}

pub fn parse(script: &str) -> Result<Vec<Gesture>> {
    let mut gestures = Vec::new();
    for (index, part) in script.split(';').enumerate() {
        let part = part.trim();
        if part.is_empty() {
            continue;
        }
        let Some((row, frames)) = part.split_once(':') else {
            bail!("gesture {index} ({part:?}) is missing a `row:` prefix");
        };
        let row = row
            .trim()
            .parse::<usize>()
            .with_context(|| format!("gesture {index}: bad row {row:?}"))?;
        let frames = frames
            .split(',')
            .map(|frame| {
                frame
                    .trim()
                    .parse::<f32>()
                    .with_context(|| format!("gesture {index}: bad translation {frame:?}"))
            })
            .collect::<Result<Vec<_>>>()?;
        if frames.iter().any(|dx| !dx.is_finite()) {
            bail!("gesture {index}: translations must be finite");
        }
        gestures.push(Gesture { row, frames });
    }
    Ok(gestures)
}
