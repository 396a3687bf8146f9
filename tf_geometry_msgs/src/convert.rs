use nalgebra as na;

use crate::msg::builtin_interfaces::Time;
use crate::msg::geometry_msgs::{
    Point, PointStamped, PoseStamped, PoseWithCovarianceStamped, TransformStamped, Vector3,
    Vector3Stamped, Wrench, WrenchStamped,
};
use crate::transforms::{isometry_from_pose, isometry_from_transform, pose_from_isometry};

/// Access to the header of a stamped message, as required by the generic
/// transform-buffer interface.
pub trait Stamped {
    /// The timestamp carried in the message header.
    fn timestamp(&self) -> Time;
    /// The frame the message is expressed in, verbatim from the header.
    fn frame_id(&self) -> &str;
}

macro_rules! stamped {
    ($($type_name:ty),* $(,)?) => {$(
        impl Stamped for $type_name {
            fn timestamp(&self) -> Time {
                self.header.stamp
            }
            fn frame_id(&self) -> &str {
                &self.header.frame_id
            }
        }
    )*};
}
stamped!(
    Vector3Stamped,
    PointStamped,
    PoseStamped,
    PoseWithCovarianceStamped,
    WrenchStamped,
    TransformStamped,
);

/// Conversion between a native representation and its message form, as
/// required by the generic transform-buffer interface. The geometry messages
/// are their own native representation, so both directions are identities.
pub trait MessageForm: Sized {
    type Msg;
    fn to_msg(&self) -> Self::Msg;
    fn from_msg(msg: &Self::Msg) -> Self;
}

macro_rules! identity_message_form {
    ($($type_name:ty),* $(,)?) => {$(
        impl MessageForm for $type_name {
            type Msg = $type_name;
            fn to_msg(&self) -> Self::Msg {
                self.clone()
            }
            fn from_msg(msg: &Self::Msg) -> Self {
                msg.clone()
            }
        }
    )*};
}
identity_message_form!(
    Vector3Stamped,
    PointStamped,
    PoseStamped,
    PoseWithCovarianceStamped,
    WrenchStamped,
);

/// Re-expression of a geometric quantity in another coordinate frame.
pub trait Transformable {
    /// Returns `self` expressed in the target frame of `transform`; stamped
    /// results take both timestamp and frame id from the transform's header.
    ///
    /// No frame bookkeeping happens here: whether `transform` actually maps
    /// out of the frame `self` is currently expressed in is the caller's
    /// responsibility (normally the transform-lookup layer that produced it).
    fn transformed(&self, transform: &TransformStamped) -> Self;
}

impl Transformable for Vector3 {
    fn transformed(&self, transform: &TransformStamped) -> Self {
        // Free vector: rotation only, translation does not apply.
        let v = isometry_from_transform(&transform.transform)
            .rotation
            .transform_vector(&na::Vector3::new(self.x, self.y, self.z));
        Self {
            x: v.x,
            y: v.y,
            z: v.z,
        }
    }
}

impl Transformable for Vector3Stamped {
    fn transformed(&self, transform: &TransformStamped) -> Self {
        Self {
            header: transform.header.clone(),
            vector: self.vector.transformed(transform),
        }
    }
}

impl Transformable for PointStamped {
    fn transformed(&self, transform: &TransformStamped) -> Self {
        let p = isometry_from_transform(&transform.transform).transform_point(&na::Point3::new(
            self.point.x,
            self.point.y,
            self.point.z,
        ));
        Self {
            header: transform.header.clone(),
            point: Point {
                x: p.x,
                y: p.y,
                z: p.z,
            },
        }
    }
}

impl Transformable for PoseStamped {
    fn transformed(&self, transform: &TransformStamped) -> Self {
        let iso = isometry_from_transform(&transform.transform) * isometry_from_pose(&self.pose);
        Self {
            header: transform.header.clone(),
            pose: pose_from_isometry(&iso),
        }
    }
}

impl Transformable for Wrench {
    fn transformed(&self, transform: &TransformStamped) -> Self {
        // Force and torque are both free vectors; each rotates, neither
        // translates.
        Self {
            force: self.force.transformed(transform),
            torque: self.torque.transformed(transform),
        }
    }
}

impl Transformable for WrenchStamped {
    fn transformed(&self, transform: &TransformStamped) -> Self {
        Self {
            header: transform.header.clone(),
            wrench: self.wrench.transformed(transform),
        }
    }
}

/// Reshape the flat row-major covariance of a pose into its 6x6 form, row
/// `i` being elements `[6i..6i + 5]`. Symmetry is not checked.
pub fn covariance_matrix(msg: &PoseWithCovarianceStamped) -> na::Matrix6<f64> {
    na::Matrix6::from_row_slice(&msg.pose.covariance)
}
