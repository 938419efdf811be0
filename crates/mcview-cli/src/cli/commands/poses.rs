//! `mcview poses` – list skin render poses.

use mcview_core::Pose;

pub fn run_poses() {
    for (i, pose) in Pose::ALL.iter().enumerate() {
        println!("{:>2}  {}", i, pose);
    }
}
