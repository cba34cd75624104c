use crate::types::{LandmarkFrame, PoseLandmarks};

/// Normaliza la salida cruda del estimador de pose al frame compacto que
/// consume el clasificador. `None` cuando no se detectó pose en el frame.
/// Con `mirror_camera` los lados se intercambian antes de clasificar, de
/// modo que la vista previa en espejo y el gesto del usuario coincidan.
pub fn adapt(pose: Option<&PoseLandmarks>, mirror_camera: bool) -> Option<LandmarkFrame> {
    let pose = pose?;
    let frame = LandmarkFrame {
        left_shoulder_y: pose.left_shoulder.1,
        right_shoulder_y: pose.right_shoulder.1,
        left_wrist_y: pose.left_wrist.1,
        right_wrist_y: pose.right_wrist.1,
    };

    Some(if mirror_camera { frame.mirrored() } else { frame })
}
