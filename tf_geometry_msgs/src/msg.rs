//! Local mirrors of the message types this crate adapts. Field names and
//! numeric types follow the upstream interface definitions verbatim; the
//! adapter must not alter that schema.

/// [builtin_interfaces](https://github.com/ros2/rcl_interfaces/tree/HEAD/builtin_interfaces)
pub mod builtin_interfaces {
    use serde::{Deserialize, Serialize};

    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
    #[serde(default)]
    pub struct Time {
        pub sec: i32,
        pub nanosec: u32,
    }

    impl Time {
        pub const ZERO: Self = Self { sec: 0, nanosec: 0 };
    }
}

/// [std_msgs](https://github.com/ros2/common_interfaces/tree/HEAD/std_msgs)
pub mod std_msgs {
    use serde::{Deserialize, Serialize};

    use crate::msg::builtin_interfaces;

    #[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
    #[serde(default)]
    pub struct Header {
        pub stamp: builtin_interfaces::Time,
        pub frame_id: String,
    }
}

/// [geometry_msgs](https://github.com/ros2/common_interfaces/tree/HEAD/geometry_msgs)
pub mod geometry_msgs {
    use serde::{Deserialize, Serialize};

    use crate::msg::std_msgs;

    #[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
    #[serde(default)]
    pub struct Vector3 {
        pub x: f64,
        pub y: f64,
        pub z: f64,
    }

    #[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
    #[serde(default)]
    pub struct Vector3Stamped {
        pub header: std_msgs::Header,
        pub vector: Vector3,
    }

    #[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
    #[serde(default)]
    pub struct Point {
        pub x: f64,
        pub y: f64,
        pub z: f64,
    }

    #[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
    #[serde(default)]
    pub struct PointStamped {
        pub header: std_msgs::Header,
        pub point: Point,
    }

    #[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
    #[serde(default)]
    pub struct Quaternion {
        pub x: f64,
        pub y: f64,
        pub z: f64,
        pub w: f64,
    }
    impl Default for Quaternion {
        fn default() -> Self {
            Self {
                x: 0.0,
                y: 0.0,
                z: 0.0,
                w: 1.0,
            }
        }
    }

    #[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
    #[serde(default)]
    pub struct Pose {
        pub position: Point,
        pub orientation: Quaternion,
    }

    #[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
    #[serde(default)]
    pub struct PoseStamped {
        pub header: std_msgs::Header,
        pub pose: Pose,
    }

    #[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
    #[serde(default)]
    pub struct PoseWithCovariance {
        pub pose: Pose,
        /// Row-major 6x6 covariance over (x, y, z, roll, pitch, yaw),
        /// always 36 elements.
        pub covariance: Vec<f64>,
    }
    impl Default for PoseWithCovariance {
        fn default() -> Self {
            Self {
                pose: Default::default(),
                covariance: vec![0.0; 36],
            }
        }
    }

    #[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
    #[serde(default)]
    pub struct PoseWithCovarianceStamped {
        pub header: std_msgs::Header,
        pub pose: PoseWithCovariance,
    }

    #[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
    #[serde(default)]
    pub struct Wrench {
        pub force: Vector3,
        pub torque: Vector3,
    }

    #[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
    #[serde(default)]
    pub struct WrenchStamped {
        pub header: std_msgs::Header,
        pub wrench: Wrench,
    }

    #[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
    #[serde(default)]
    pub struct Transform {
        pub translation: Vector3,
        pub rotation: Quaternion,
    }

    #[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
    #[serde(default)]
    pub struct TransformStamped {
        pub header: std_msgs::Header,
        pub child_frame_id: String,
        pub transform: Transform,
    }
}
