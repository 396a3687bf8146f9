use na::geometry::{Isometry3, Translation3, UnitQuaternion};
use nalgebra as na;

use crate::msg::geometry_msgs::{Point, Pose, Quaternion, Transform, Vector3};

/// Build the rigid transform described by a `Transform` message.
///
/// The rotation quaternion is taken as-is: a non-unit quaternion is neither
/// rejected nor renormalized and yields a scaling, non-rigid result.
pub fn isometry_from_transform(tf: &Transform) -> Isometry3<f64> {
    let trans = Translation3::new(tf.translation.x, tf.translation.y, tf.translation.z);
    let rot = na::Unit::new_unchecked(na::geometry::Quaternion::new(
        tf.rotation.w,
        tf.rotation.x,
        tf.rotation.y,
        tf.rotation.z,
    ));

    Isometry3::from_parts(trans, rot)
}

/// Build the rigid transform described by a `Pose` message.
pub fn isometry_from_pose(pose: &Pose) -> Isometry3<f64> {
    let trans = Translation3::new(pose.position.x, pose.position.y, pose.position.z);
    let rot = na::Unit::new_unchecked(na::geometry::Quaternion::new(
        pose.orientation.w,
        pose.orientation.x,
        pose.orientation.y,
        pose.orientation.z,
    ));

    Isometry3::from_parts(trans, rot)
}

pub fn pose_from_isometry(iso: &Isometry3<f64>) -> Pose {
    Pose {
        position: Point {
            x: iso.translation.x,
            y: iso.translation.y,
            z: iso.translation.z,
        },
        orientation: quaternion_to_msg(&iso.rotation),
    }
}

pub fn transform_from_isometry(iso: &Isometry3<f64>) -> Transform {
    Transform {
        translation: Vector3 {
            x: iso.translation.x,
            y: iso.translation.y,
            z: iso.translation.z,
        },
        rotation: quaternion_to_msg(&iso.rotation),
    }
}

pub(crate) fn quaternion_to_msg(rot: &UnitQuaternion<f64>) -> Quaternion {
    Quaternion {
        x: rot.i,
        y: rot.j,
        z: rot.k,
        w: rot.w,
    }
}
