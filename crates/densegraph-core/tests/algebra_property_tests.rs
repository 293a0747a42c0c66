//! Property-based invariants for the graph algebra over randomized square
//! matrices.
//!
//! Weights are kept small enough that the checked addition path never
//! overflows; the overflow behavior itself has dedicated unit tests.

use proptest::{
    collection::vec,
    prelude::{prop_assert, prop_assert_eq, Strategy},
    proptest,
};

use densegraph_core::Graph;

const MAX_VERTICES: usize = 6;
const WEIGHT_RANGE: std::ops::Range<i32> = -1_000..1_000;

fn square_matrix_strategy() -> impl Strategy<Value = Vec<Vec<i32>>> {
    (0..=MAX_VERTICES)
        .prop_flat_map(|n| vec(vec(WEIGHT_RANGE, n), n))
}

fn graph_pair_strategy() -> impl Strategy<Value = (Graph, Graph)> {
    (1..=MAX_VERTICES).prop_flat_map(|n| {
        let lhs = vec(vec(WEIGHT_RANGE, n), n);
        let rhs = vec(vec(WEIGHT_RANGE, n), n);
        (lhs, rhs).prop_map(|(l, r)| {
            (Graph::try_from(l).unwrap(), Graph::try_from(r).unwrap())
        })
    })
}

proptest! {
    #[test]
    fn prop_add_is_cell_wise((a, b) in graph_pair_strategy()) {
        let sum = a.try_add(&b).unwrap();
        for i in 0..a.vertex_count() {
            let sum_row = sum.adjacency_row(i).unwrap();
            let a_row = a.adjacency_row(i).unwrap();
            let b_row = b.adjacency_row(i).unwrap();
            for j in 0..a.vertex_count() {
                prop_assert_eq!(sum_row[j], a_row[j] + b_row[j]);
            }
        }
    }

    #[test]
    fn prop_add_then_sub_restores_lhs((a, b) in graph_pair_strategy()) {
        let restored = a.try_add(&b).unwrap().try_sub(&b).unwrap();
        prop_assert_eq!(restored, a);
    }

    #[test]
    fn prop_add_assign_matches_add((a, b) in graph_pair_strategy()) {
        // Within the non-overflowing weight range the checked and unchecked
        // additions agree.
        let checked = a.try_add(&b).unwrap();
        let mut in_place = a.clone();
        in_place.try_add_assign(&b).unwrap();
        prop_assert_eq!(checked, in_place);
    }

    #[test]
    fn prop_scale_is_cell_wise(matrix in square_matrix_strategy(), factor in -50i32..50) {
        let g = Graph::try_from(matrix.clone()).unwrap();
        let scaled = g.scale(factor);
        for (i, row) in matrix.iter().enumerate() {
            let scaled_row = scaled.adjacency_row(i).unwrap();
            for (j, &cell) in row.iter().enumerate() {
                prop_assert_eq!(scaled_row[j], cell * factor);
            }
        }
    }

    #[test]
    fn prop_scale_by_one_is_identity(matrix in square_matrix_strategy()) {
        let g = Graph::try_from(matrix).unwrap();
        prop_assert_eq!(g.scale(1), g);
    }

    #[test]
    fn prop_neg_is_self_inverse(matrix in square_matrix_strategy()) {
        let g = Graph::try_from(matrix).unwrap();
        prop_assert_eq!(-(-&g), g);
    }

    #[test]
    fn prop_display_round_trip(matrix in square_matrix_strategy()) {
        let g = Graph::try_from(matrix).unwrap();
        let restored: Graph = g.to_string().parse().unwrap();
        prop_assert_eq!(g, restored);
    }

    #[test]
    fn prop_serde_round_trip(matrix in square_matrix_strategy()) {
        let g = Graph::try_from(matrix).unwrap();
        let json = serde_json::to_string(&g).unwrap();
        let restored: Graph = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(g, restored);
    }

    #[test]
    fn prop_comparisons_are_coherent((a, b) in graph_pair_strategy()) {
        prop_assert_eq!(a.try_gt(&b).unwrap(), !a.try_le(&b).unwrap());
        prop_assert_eq!(a.try_ge(&b).unwrap(), !a.try_lt(&b).unwrap());
        prop_assert_eq!(a.try_ne(&b).unwrap(), !a.try_eq(&b).unwrap());
        prop_assert_eq!(
            a.try_le(&b).unwrap(),
            a.try_lt(&b).unwrap() || a.try_eq(&b).unwrap()
        );
    }

    #[test]
    fn prop_graph_equals_itself(matrix in square_matrix_strategy()) {
        let g = Graph::try_from(matrix).unwrap();
        let copy = g.clone();
        prop_assert!(g.try_eq(&copy).unwrap());
        prop_assert!(!g.try_lt(&copy).unwrap() || g.is_empty());
    }

    #[test]
    fn prop_edges_report_matrix_cells(matrix in square_matrix_strategy()) {
        let g = Graph::try_from(matrix.clone()).unwrap();
        for (from, to, weight) in g.edges() {
            prop_assert!(weight != 0);
            prop_assert_eq!(matrix[from][to], weight);
        }
        prop_assert_eq!(g.edge_count(), g.edges().len());
    }

    #[test]
    fn prop_increment_then_decrement_is_identity(matrix in square_matrix_strategy()) {
        let g = Graph::try_from(matrix).unwrap();
        let mut walked = g.clone();
        walked.increment();
        walked.decrement();
        prop_assert_eq!(walked, g);
    }
}
