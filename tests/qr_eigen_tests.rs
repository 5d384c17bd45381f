use clifford_engine::prelude::*;

const EPS: f64 = 1e-9;

fn close(a: &Coeff, b: f64) -> bool {
    (to_f64(a) - b).abs() < EPS
}

/// Apply the Q columns to an R column: Σ_i R[i]·q_i.
fn reconstruct(q: &[Multivector], r_col: &Multivector) -> Multivector {
    let mut out = Multivector::empty();
    for (i, q_col) in q.iter().enumerate() {
        let coeff = r_col.component(1 << i);
        out = out.added(&q_col.scaled(&coeff));
    }
    out
}

#[test]
fn qr_of_orthonormal_columns_is_the_identity() {
    let ga = Ga::euclidean(3).unwrap();
    let columns = imv(&ga);
    let decomposition = qr(&ga, &columns).unwrap();
    for (i, column) in columns.iter().enumerate() {
        assert_eq!(decomposition.q[i], *column, "Q column {i}");
        assert_eq!(decomposition.r[i], *column, "R column {i}");
    }
}

#[test]
fn qr_reconstructs_a_generic_basis() {
    let ga = Ga::euclidean(2).unwrap();
    let a0 = ga.multivector(&[(int(3), "e0"), (int(4), "e1")]).unwrap();
    let a1 = ga.multivector(&[(int(1), "e0"), (int(1), "e1")]).unwrap();
    let columns = vec![a0.clone(), a1.clone()];
    let decomposition = qr(&ga, &columns).unwrap();

    // R is upper triangular: column 0 has no e1 component
    assert!(
        close(&decomposition.r[0].component(0b10), 0.0),
        "below-diagonal entry {}",
        decomposition.r[0]
    );
    // the diagonal carries the column length (sign per the bisector
    // convention)
    assert!(close(&decomposition.r[0].component(0b01), -5.0));

    // Q columns are orthonormal
    for i in 0..2 {
        for j in 0..2 {
            let dot = ga
                .product(&decomposition.q[i], &decomposition.q[j])
                .unwrap()
                .scalar_part();
            let expected = if i == j { 1.0 } else { 0.0 };
            assert!(close(&dot, expected), "q{i}·q{j} = {dot}");
        }
    }

    // Q·R gives back the input
    for (col, original) in [(0, &a0), (1, &a1)] {
        let rebuilt = reconstruct(&decomposition.q, &decomposition.r[col]);
        for bitmap in [0b01u32, 0b10] {
            let got = rebuilt.component(bitmap);
            let want = to_f64(&original.component(bitmap));
            assert!(close(&got, want), "column {col} bitmap {bitmap:b}: {got}");
        }
    }
}

#[test]
fn qr_skips_columns_already_on_their_axes() {
    let ga = Ga::euclidean(3).unwrap();
    // diagonal columns with mixed signs survive untouched, signs intact
    let columns = vec![
        ga.multivector(&[(int(2), "e0")]).unwrap(),
        ga.multivector(&[(int(-3), "e1")]).unwrap(),
        ga.multivector(&[(int(4), "e2")]).unwrap(),
    ];
    let decomposition = qr(&ga, &columns).unwrap();
    for (i, column) in columns.iter().enumerate() {
        assert_eq!(decomposition.r[i], *column, "R column {i}");
        assert_eq!(decomposition.q[i], imv(&ga)[i], "Q column {i}");
    }
}

#[test]
fn eigendecomposition_of_diagonal_metric() {
    let ga = Ga::euclidean(2).unwrap();
    let metric_mvs = vec![
        ga.multivector(&[(int(2), "e0")]).unwrap(),
        ga.multivector(&[(int(-3), "e1")]).unwrap(),
    ];
    let decomposition = eigendecompose(&ga, &metric_mvs).unwrap();
    assert_eq!(decomposition.eigenvalues, vec![int(2), int(-3)]);
    assert_eq!(decomposition.eigenvectors, imv(&ga));
}

#[test]
fn eigendecomposition_of_triangular_metric() {
    let ga = Ga::euclidean(2).unwrap();
    let metric_mvs = vec![
        ga.multivector(&[(int(2), "e0")]).unwrap(),
        ga.multivector(&[(int(1), "e0"), (int(3), "e1")]).unwrap(),
    ];
    let decomposition = eigendecompose(&ga, &metric_mvs).unwrap();
    assert_eq!(decomposition.eigenvalues, vec![int(2), int(3)]);
}

#[test]
fn metric_multivectors_drive_algebra_construction() {
    let seed = Ga::euclidean(2).unwrap();
    let metric_mvs = vec![
        seed.multivector(&[(int(2), "e0")]).unwrap(),
        seed.multivector(&[(int(3), "e1")]).unwrap(),
    ];
    let ga = Ga::new(GaOptions {
        mm: Some(metric_mvs),
        ..Default::default()
    })
    .unwrap();
    // the eigenvalue spectrum became the metric diagonal
    assert_eq!(ga.metric(), &[int(2), int(3)]);
    assert_eq!(ga.signature_counts(), (2, 0, 0));
    let eigen = ga.eigen().expect("eigendata stored");
    assert_eq!(eigen.eigenvalues, vec![int(2), int(3)]);
    assert_eq!(eigen.mmga.dim(), 2);

    // e0·e0 now squares to its eigenvalue
    let e0 = ga.multivector(&[(int(1), "e0")]).unwrap();
    assert_eq!(ga.product(&e0, &e0).unwrap().scalar_part(), int(2));
}

#[test]
fn blade_expansion_through_metric_vectors() {
    let seed = Ga::euclidean(2).unwrap();
    let metric_mvs = vec![
        seed.multivector(&[(int(2), "e0")]).unwrap(),
        seed.multivector(&[(int(3), "e1")]).unwrap(),
    ];
    let ga = Ga::new(GaOptions {
        mm: Some(metric_mvs),
        ..Default::default()
    })
    .unwrap();

    // e01 expands as (2e0) ∧ (3e1) = 6·e01 in the orthonormal basis
    let blade = ga.blade("e01").unwrap();
    let expanded = ga.expand_blade(&blade).unwrap();
    assert_eq!(expanded.component(0b11), int(6));
    assert_eq!(expanded.blades.len(), 1);

    // without stored metric vectors the expansion is unavailable
    let plain = Ga::euclidean(2).unwrap();
    let plain_blade = plain.blade("e01").unwrap();
    assert!(matches!(
        plain.expand_blade(&plain_blade),
        Err(GaError::MissingMetric)
    ));
}

#[test]
fn explicit_expansion_list() {
    let ga = Ga::euclidean(3).unwrap();
    let expansions = vec![
        ga.multivector(&[(int(1), "e0"), (int(1), "e1")]).unwrap(),
        ga.multivector(&[(int(1), "e1")]).unwrap(),
        ga.multivector(&[(int(1), "e2")]).unwrap(),
    ];
    // (e0+e1) ∧ e1 = e01
    let blade = ga.blade("e01").unwrap();
    let expanded = clifford_engine::rebase::expand_blade(&ga, &expansions, &blade).unwrap();
    assert_eq!(expanded.component(0b011), int(1));
    assert_eq!(expanded.blades.len(), 1);
}
