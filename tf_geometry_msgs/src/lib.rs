//! Frame-transform adapters for the [ROS geometry messages](https://github.com/ros2/common_interfaces/tree/HEAD/geometry_msgs).
//! Points, vectors, poses and wrenches (and their stamped variants) can be
//! re-expressed in another coordinate frame through a `TransformStamped`,
//! with the rigid-body math delegated to [nalgebra](https://nalgebra.org).
//! It is part of a larger suite of rust libraries that provide support for
//! various robotics related functionality.
//!
//! This crate only applies transforms it is handed; looking the right
//! transform up (and checking that it maps out of the source's frame at all)
//! is the job of the surrounding transform-buffer infrastructure.
//!
//! Example usage:
//!
//! ```
//! use tf_geometry_msgs::msg::geometry_msgs::{PointStamped, TransformStamped};
//! use tf_geometry_msgs::Transformable;
//!
//! let mut map_to_base = TransformStamped::default();
//! map_to_base.header.frame_id = "map".to_string();
//! map_to_base.child_frame_id = "base_link".to_string();
//! map_to_base.transform.translation.x = 1.0;
//!
//! let point = PointStamped::default();
//! let in_map = point.transformed(&map_to_base);
//! assert_eq!(in_map.point.x, 1.0);
//! assert_eq!(in_map.header.frame_id, "map");
//! ```

mod convert;
pub mod msg;
pub mod transforms;
pub use convert::{covariance_matrix, MessageForm, Stamped, Transformable};
