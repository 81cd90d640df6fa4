// Fixed illustrative plant network used for demos and regression tests
use crate::graph::{Level, Node};
use crate::network::{GraphBuilder, NetworkGraph};

const SAMPLE_NODES: [(&str, Level, &str); 7] = [
    ("Enterprise-1", 4, "Domain Controller"),
    ("DMZ-1", 3, "Jump Host"),
    ("IT-Switch", 3, "Switch"),
    ("Engineering-HMI", 2, "HMI"),
    ("PLC-1", 1, "PLC"),
    ("PLC-2", 1, "PLC"),
    ("Historian", 2, "Historian"),
];

const SAMPLE_EDGES: [(&str, &str); 7] = [
    ("Enterprise-1", "DMZ-1"),
    ("DMZ-1", "Engineering-HMI"),
    ("Engineering-HMI", "PLC-1"),
    ("Engineering-HMI", "PLC-2"),
    ("IT-Switch", "Enterprise-1"),
    // questionable, but only one level apart
    ("PLC-1", "Historian"),
    // L4 -> L1
    ("Enterprise-1", "PLC-2"),
];

/// Build the sample plant network.
///
/// Seven devices spread over levels 1-4 and seven links, exactly one of
/// which (`Enterprise-1 -> PLC-2`) jumps more than one level.
pub fn build_sample_network() -> NetworkGraph {
    let mut builder = GraphBuilder::new();
    for (id, level, role) in SAMPLE_NODES {
        builder.push_node(Node::new(id).with_level(level).with_role(role));
    }
    for (source, target) in SAMPLE_EDGES {
        builder.push_edge(source, target);
    }
    builder.build()
}
