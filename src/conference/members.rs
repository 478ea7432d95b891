//! Conference rosters, spelled the way the draft tables spell colleges.

use std::collections::BTreeSet;
use std::sync::LazyLock;

pub static BIG_TEN: LazyLock<BTreeSet<&'static str>> = LazyLock::new(|| {
    BTreeSet::from([
        "Penn State",
        "Michigan",
        "Ohio State",
        "Michigan State",
        "Iowa",
        "Wisconsin",
        "Minnesota",
        "Nebraska",
        "Illinois",
        "Indiana",
        "Purdue",
        "Rutgers",
        "Northwestern",
        "Maryland",
        "USC",
        "UCLA",
        "Oregon",
        "Washington",
    ])
});

pub static SEC: LazyLock<BTreeSet<&'static str>> = LazyLock::new(|| {
    BTreeSet::from([
        "Alabama",
        "Georgia",
        "LSU",
        "Florida",
        "Tennessee",
        "Kentucky",
        "Auburn",
        "Ole Miss",
        "Mississippi State",
        "Missouri",
        "Texas A&M",
        "Texas",
        "Oklahoma",
        "South Carolina",
        "Vanderbilt",
        "Arkansas",
    ])
});
