//! Actor vs. front obstacle pair
//!
//! Only the front pair is ever tested: earlier pairs are already gone and
//! later ones are still ahead.

use glam::Vec2;

use super::obstacles::ObstacleStream;

/// Where the actor stands relative to the front pair
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PairContact {
    /// No pair, or the pair has not reached the actor yet
    Clear,
    /// Inside the pair's column and within the gap
    InGap,
    /// Inside the pair's column and touching a piece
    Struck,
    /// Fully past the pair's column
    Passed,
}

/// Classify the actor (centre `pos`, radius `r`) against the front pair
pub fn front_pair_contact(pos: Vec2, r: f32, obstacles: &ObstacleStream) -> PairContact {
    let Some(front) = obstacles.front() else {
        return PairContact::Clear;
    };

    let leading_edge = pos.x + r;
    if leading_edge < front.x {
        return PairContact::Clear;
    }

    if leading_edge < front.x + obstacles.width() {
        let roof = obstacles.gap_top(front);
        let floor = obstacles.gap_bottom(front);
        if pos.y - r <= roof || pos.y + r >= floor {
            PairContact::Struck
        } else {
            PairContact::InGap
        }
    } else {
        PairContact::Passed
    }
}
