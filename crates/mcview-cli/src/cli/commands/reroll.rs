//! `mcview reroll <pose>` – print successive rerolls from a starting pose.

use mcview_core::{Pose, PoseSelector};

pub fn run_reroll(start: Pose, count: usize) {
    let mut selector = PoseSelector::starting_at(start);
    for _ in 0..count {
        println!("{}", selector.reroll());
    }
}
