//! Weighted undirected graph and Kruskal's minimum spanning forest.

use std::hash::Hash;

use super::pair::UnorderedPair;
use super::union_find::DisjointSet;

/// A weighted undirected edge carrying auxiliary data `D`.
#[derive(Debug, Clone, PartialEq)]
pub struct Edge<V, D = ()> {
    pub pair: UnorderedPair<V>,
    pub weight: f64,
    pub data: D,
}

impl<V: Ord> Edge<V, ()> {
    /// Edge without auxiliary data.
    pub fn new(a: V, b: V, weight: f64) -> Self {
        Self {
            pair: UnorderedPair::new(a, b),
            weight,
            data: (),
        }
    }
}

impl<V: Ord, D> Edge<V, D> {
    /// Edge with auxiliary data.
    pub fn with_data(a: V, b: V, weight: f64, data: D) -> Self {
        Self {
            pair: UnorderedPair::new(a, b),
            weight,
            data,
        }
    }
}

/// Vertex list plus edge list. Duplicate edges and self-loops are allowed.
#[derive(Debug, Clone, PartialEq)]
pub struct Graph<V, D = ()> {
    pub vertices: Vec<V>,
    pub edges: Vec<Edge<V, D>>,
}

impl<V, D> Graph<V, D> {
    pub fn new(vertices: Vec<V>, edges: Vec<Edge<V, D>>) -> Self {
        Self { vertices, edges }
    }

    /// Sum of all edge weights.
    pub fn total_weight(&self) -> f64 {
        self.edges.iter().map(|e| e.weight).sum()
    }
}

/// Kruskal's algorithm, O(E log E).
///
/// Returns the edges of a minimum spanning forest, in ascending weight
/// order. Equal weights keep their input order (stable sort), so the output
/// is fully determined by the input. Self-loops are never selected because
/// their endpoints are already connected. Endpoints missing from
/// `graph.vertices` are registered on the fly.
pub fn kruskal<V, D>(graph: &Graph<V, D>) -> Vec<&Edge<V, D>>
where
    V: Eq + Hash + Clone,
{
    let mut uf = DisjointSet::from_labels(graph.vertices.iter().cloned());

    let mut sorted: Vec<&Edge<V, D>> = graph.edges.iter().collect();
    sorted.sort_by(|a, b| a.weight.total_cmp(&b.weight));

    let mut forest = Vec::new();
    for e in sorted {
        if uf.connect(e.pair.first(), e.pair.second()) {
            forest.push(e);
        }
    }
    forest
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::seq::SliceRandom;
    use rand_chacha::ChaCha8Rng;
    use std::collections::HashSet;

    /// Weighted graph from CLRS, figure 23.4.
    fn clrs_graph() -> Graph<&'static str> {
        let edges = vec![
            Edge::new("a", "b", 4.0),
            Edge::new("a", "h", 8.0),
            Edge::new("b", "c", 8.0),
            Edge::new("b", "h", 11.0),
            Edge::new("c", "d", 7.0),
            Edge::new("c", "f", 4.0),
            Edge::new("c", "i", 2.0),
            Edge::new("d", "e", 9.0),
            Edge::new("d", "f", 14.0),
            Edge::new("e", "f", 10.0),
            Edge::new("f", "g", 2.0),
            Edge::new("g", "h", 1.0),
            Edge::new("g", "i", 6.0),
            Edge::new("h", "i", 7.0),
        ];
        Graph::new(vec!["a", "b", "c", "d", "e", "f", "g", "h", "i"], edges)
    }

    fn pair_set<D>(edges: &[&Edge<&'static str, D>]) -> HashSet<UnorderedPair<&'static str>> {
        edges.iter().map(|e| e.pair).collect()
    }

    #[test]
    fn test_kruskal_clrs() {
        let g = clrs_graph();
        let mst = kruskal(&g);

        let expected: HashSet<_> = [
            ("a", "b"),
            ("a", "h"),
            ("c", "d"),
            ("c", "f"),
            ("c", "i"),
            ("d", "e"),
            ("f", "g"),
            ("g", "h"),
        ]
        .into_iter()
        .map(|(x, y)| UnorderedPair::new(x, y))
        .collect();

        assert_eq!(mst.len(), 8);
        assert_eq!(pair_set(&mst), expected);
        let w: f64 = mst.iter().map(|e| e.weight).sum();
        assert_eq!(w, 37.0);
    }

    #[test]
    fn test_kruskal_is_stable_under_shuffle() {
        let base = clrs_graph();
        let expected = pair_set(&kruskal(&base));
        // (a, h) and (b, c) both weigh 8; whichever comes first is kept.
        let mut alternative = expected.clone();
        alternative.remove(&UnorderedPair::new("a", "h"));
        alternative.insert(UnorderedPair::new("b", "c"));

        let mut rng = ChaCha8Rng::seed_from_u64(0x5EED);
        for _ in 0..20 {
            let mut g = base.clone();
            g.edges.shuffle(&mut rng);
            let mst = kruskal(&g);
            let got = pair_set(&mst);
            assert!(got == expected || got == alternative, "unexpected forest {got:?}");
            let w: f64 = mst.iter().map(|e| e.weight).sum();
            assert_eq!(w, 37.0);

            // Same input order, same output order.
            let again: Vec<_> = kruskal(&g).iter().map(|e| e.pair).collect();
            let first: Vec<_> = mst.iter().map(|e| e.pair).collect();
            assert_eq!(again, first);
        }
    }

    #[test]
    fn test_kruskal_matches_petgraph_weight() {
        use petgraph::algo::min_spanning_tree;
        use petgraph::data::FromElements;
        use petgraph::graph::UnGraph;

        let g = clrs_graph();
        let index = |v: &str| g.vertices.iter().position(|&x| x == v).unwrap() as u32;
        let pg = UnGraph::<(), f64>::from_edges(
            g.edges
                .iter()
                .map(|e| (index(*e.pair.first()), index(*e.pair.second()), e.weight)),
        );
        let tree = UnGraph::<(), f64>::from_elements(min_spanning_tree(&pg));
        let expected: f64 = tree.edge_weights().sum();

        let ours: f64 = kruskal(&g).iter().map(|e| e.weight).sum();
        assert_eq!(ours, expected);
    }

    #[test]
    fn test_kruskal_tie_keeps_input_order() {
        // Triangle with equal weights: the first two input edges win.
        let g = Graph::new(
            vec![0, 1, 2],
            vec![Edge::new(1, 2, 1.0), Edge::new(0, 2, 1.0), Edge::new(0, 1, 1.0)],
        );
        let mst = kruskal(&g);
        let pairs: Vec<_> = mst.iter().map(|e| e.pair).collect();
        assert_eq!(pairs, vec![UnorderedPair::new(1, 2), UnorderedPair::new(0, 2)]);
    }

    #[test]
    fn test_kruskal_forest_and_degenerate_edges() {
        let g = Graph::new(
            vec![0, 1, 2, 3],
            vec![
                Edge::new(0, 0, 0.0),
                Edge::new(0, 1, 3.0),
                Edge::new(1, 0, 1.0),
                Edge::new(2, 3, 5.0),
            ],
        );
        let mst = kruskal(&g);
        let pairs: Vec<_> = mst.iter().map(|e| (e.pair, e.weight)).collect();
        assert_eq!(
            pairs,
            vec![(UnorderedPair::new(0, 1), 1.0), (UnorderedPair::new(2, 3), 5.0)]
        );
    }

    #[test]
    fn test_kruskal_empty() {
        let g: Graph<u32> = Graph::new(Vec::new(), Vec::new());
        assert!(kruskal(&g).is_empty());
    }

    #[test]
    fn test_kruskal_preserves_edge_data() {
        let g = Graph::new(
            vec!["p", "q"],
            vec![Edge::with_data("q", "p", 2.5, "payload")],
        );
        let mst = kruskal(&g);
        assert_eq!(mst[0].data, "payload");
        assert_eq!(*mst[0].pair.first(), "p");
    }
}
