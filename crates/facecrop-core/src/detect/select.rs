//! Choosing which detected face to crop.

use serde::{Deserialize, Serialize};

use super::DetectedFace;
use crate::plan::ImageExtent;

/// Policy picking the single face the planner operates on.
///
/// Ties are always broken in favour of the face reported first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FaceSelection {
    /// The first face in detector output order. This follows the
    /// detector's internal scan order rather than any notion of the "main"
    /// face, but it is what a bare detector call gives you.
    #[default]
    First,
    /// The face with the largest box area.
    LargestArea,
    /// The face whose centre is nearest the image centre.
    MostCentral,
    /// The face with the highest detector score.
    HighestScore,
    /// The face at this position in detector output order.
    Index(usize),
}

impl FaceSelection {
    /// Pick a face, or `None` when `faces` is empty or the index is out of range.
    pub fn select<'a>(
        &self,
        faces: &'a [DetectedFace],
        extent: ImageExtent,
    ) -> Option<&'a DetectedFace> {
        match *self {
            FaceSelection::First => faces.first(),
            FaceSelection::Index(index) => faces.get(index),
            FaceSelection::LargestArea => faces.iter().reduce(|best, face| {
                if face.bounds.area() > best.bounds.area() {
                    face
                } else {
                    best
                }
            }),
            FaceSelection::HighestScore => faces.iter().reduce(|best, face| {
                if face.score > best.score {
                    face
                } else {
                    best
                }
            }),
            FaceSelection::MostCentral => {
                let (cx, cy) = extent.center();
                let distance = |face: &DetectedFace| {
                    let (fx, fy) = face.bounds.center();
                    (fx - cx).powi(2) + (fy - cy).powi(2)
                };
                faces.iter().reduce(|best, face| {
                    if distance(face) < distance(best) {
                        face
                    } else {
                        best
                    }
                })
            }
        }
    }
}
