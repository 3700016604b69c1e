// Builds a small expression, runs backward with each traversal strategy and
// prints the resulting gradients.

use microdiff_core::{BackwardStrategy, MicroDiffError, Node};

fn main() -> Result<(), MicroDiffError> {
    for strategy in [
        BackwardStrategy::Topological,
        BackwardStrategy::PerEdge,
        BackwardStrategy::PerEdgeRecursive,
    ] {
        let a = Node::leaf(-4.0);
        let b = Node::leaf(2.0);
        let c = &a * &b + b.pow(3)?;
        let d = (&c - &a).tanh() + (&c / &b).relu();

        let stats = d.backward_with(strategy);
        println!("--- {:?} ---", strategy);
        println!("output: {}", d);
        println!("a:      {}", a);
        println!("b:      {}", b);
        println!(
            "work:   {} node visits, {} edge traversals",
            stats.node_visits, stats.edge_traversals
        );
    }
    Ok(())
}
