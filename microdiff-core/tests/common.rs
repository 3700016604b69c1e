use microdiff_core::Node;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

// Shared by several integration test crates; not every crate uses every helper.
#[allow(dead_code)]
pub fn seeded_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Uniform leaf in [-0.5, 0.5), like the reference harness' `random() - 0.5`.
#[allow(dead_code)]
pub fn random_leaf(rng: &mut StdRng) -> Node {
    Node::leaf(rng.gen::<f64>() - 0.5)
}

/// Builds a random DAG: `n_leaves` leaves, then `n_ops` operations each
/// applied to uniformly chosen earlier nodes. Returns the last node and every
/// node in creation order.
#[allow(dead_code)]
pub fn random_dag(rng: &mut StdRng, n_leaves: usize, n_ops: usize) -> (Node, Vec<Node>) {
    let mut nodes: Vec<Node> = (0..n_leaves).map(|_| random_leaf(rng)).collect();
    for _ in 0..n_ops {
        let a = nodes[rng.gen_range(0..nodes.len())].clone();
        let b = nodes[rng.gen_range(0..nodes.len())].clone();
        let next = match rng.gen_range(0..5) {
            0 => &a + &b,
            1 => (&a * &b).tanh(),
            2 => &a - &b,
            3 => a.relu(),
            _ => a.tanh() * 1.5,
        };
        nodes.push(next);
    }
    let output = nodes.last().cloned().expect("random_dag needs at least one node");
    (output, nodes)
}
