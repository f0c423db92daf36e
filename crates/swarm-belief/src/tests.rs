//! Unit tests for the belief model, the incomplete beta evaluation, and the
//! neighbor table.

use swarm_core::{AgentConfig, PeerId, Shade, Tick};

use crate::{BeliefModel, Decision, NeighborTable, reg_inc_beta};

fn model() -> BeliefModel {
    BeliefModel::new(&AgentConfig::default())
}

fn table(capacity: usize, timeout: u64) -> NeighborTable {
    NeighborTable::new(capacity, timeout)
}

#[cfg(test)]
mod incbeta {
    use super::*;

    #[test]
    fn uniform_prior_is_half() {
        let p = reg_inc_beta(1.0, 1.0, 0.5);
        assert!((p - 0.5).abs() < 1e-12, "got {p}");
    }

    #[test]
    fn power_function_case() {
        // I_x(a, 1) = x^a exactly.
        let p = reg_inc_beta(21.0, 1.0, 0.5);
        let expected = 0.5f64.powi(21);
        assert!((p - expected).abs() < 1e-12, "got {p}, want {expected}");
    }

    #[test]
    fn known_interior_value() {
        // Beta(2,2) CDF is 3x^2 - 2x^3; at x = 0.25 that is 0.15625.
        let p = reg_inc_beta(2.0, 2.0, 0.25);
        assert!((p - 0.15625).abs() < 1e-12, "got {p}");
    }

    #[test]
    fn mirror_symmetry() {
        for &(a, b) in &[(3.0, 7.0), (40.0, 2.0), (1234.0, 987.0)] {
            let p = reg_inc_beta(a, b, 0.5);
            let q = reg_inc_beta(b, a, 0.5);
            assert!((p + q - 1.0).abs() < 1e-9, "I(a,b)+I(b,a) = {}", p + q);
        }
    }

    #[test]
    fn bounds_saturate() {
        assert_eq!(reg_inc_beta(5.0, 5.0, 0.0), 0.0);
        assert_eq!(reg_inc_beta(5.0, 5.0, 1.0), 1.0);
        assert_eq!(reg_inc_beta(5.0, 5.0, -0.2), 0.0);
        assert_eq!(reg_inc_beta(5.0, 5.0, 1.7), 1.0);
    }

    #[test]
    fn large_symmetric_counts_stay_centered() {
        let p = reg_inc_beta(5_000.0, 5_000.0, 0.5);
        assert!((p - 0.5).abs() < 1e-6, "got {p}");
    }

    #[test]
    fn large_skewed_counts_saturate_cleanly() {
        // Posterior mean 0.6 with thousands of observations: essentially no
        // mass below 0.5, and the result must still be a clean probability.
        let p = reg_inc_beta(3_000.0, 2_000.0, 0.5);
        assert!(p.is_finite());
        assert!(p < 1e-6, "got {p}");

        let q = reg_inc_beta(2_000.0, 3_000.0, 0.5);
        assert!(q > 1.0 - 1e-6, "got {q}");
    }

    #[test]
    fn monotone_in_each_shape() {
        // More light evidence (larger a) can only shrink the mass below 0.5.
        let mut prev = f64::INFINITY;
        for a in [1.0, 2.0, 5.0, 20.0, 100.0, 1_000.0] {
            let p = reg_inc_beta(a, 10.0, 0.5);
            assert!(p <= prev, "I_0.5({a}, 10) = {p} rose above {prev}");
            prev = p;
        }
        // More dark evidence (larger b) can only grow it.
        let mut prev = -f64::INFINITY;
        for b in [1.0, 2.0, 5.0, 20.0, 100.0, 1_000.0] {
            let p = reg_inc_beta(10.0, b, 0.5);
            assert!(p >= prev, "I_0.5(10, {b}) = {p} fell below {prev}");
            prev = p;
        }
    }
}

#[cfg(test)]
mod belief {
    use super::*;

    #[test]
    fn counts_conserve_accepted_calls() {
        let mut m = model();
        for i in 0..50 {
            m.add_evidence(if i % 3 == 0 { Shade::Dark } else { Shade::Light });
        }
        let (light, dark) = m.counts();
        assert_eq!(light as u64 + dark as u64, m.total_evidence());
        assert_eq!(m.total_evidence(), 50);
        assert_eq!(dark, 17);
        assert_eq!(light, 33);
    }

    #[test]
    fn fresh_model_is_undecided_at_half() {
        let mut m = model();
        let p = m.evaluate_decision();
        assert!((p - 0.5).abs() < 1e-12);
        assert_eq!(m.decision(), Decision::Undecided);
    }

    #[test]
    fn twenty_light_zero_dark_decides_light() {
        let mut m = model();
        for _ in 0..20 {
            m.add_evidence(Shade::Light);
        }
        let p = m.evaluate_decision();
        assert!(p < 0.05, "p_below_half = {p}");
        assert_eq!(m.decision(), Decision::Light);
    }

    #[test]
    fn twenty_dark_zero_light_decides_dark() {
        let mut m = model();
        for _ in 0..20 {
            m.add_evidence(Shade::Dark);
        }
        let p = m.evaluate_decision();
        assert!(p > 0.95, "p_below_half = {p}");
        assert_eq!(m.decision(), Decision::Dark);
    }

    #[test]
    fn decision_is_sticky_under_contrary_evidence() {
        let mut m = model();
        for _ in 0..30 {
            m.add_evidence(Shade::Light);
        }
        m.evaluate_decision();
        assert_eq!(m.decision(), Decision::Light);

        // Bury the original evidence under a mountain of dark reports.
        for _ in 0..500 {
            m.add_evidence(Shade::Dark);
        }
        let p = m.evaluate_decision();
        assert!(p > 0.95, "posterior now strongly favors dark: {p}");
        assert_eq!(m.decision(), Decision::Light, "latched decision moved");
    }

    #[test]
    fn evaluate_is_pure_beyond_the_latch() {
        let mut m = model();
        for _ in 0..20 {
            m.add_evidence(Shade::Light);
        }
        let p1 = m.evaluate_decision();
        let p2 = m.evaluate_decision();
        assert_eq!(p1, p2);
        assert_eq!(m.counts(), (20, 0));
    }

    #[test]
    fn skewed_priors_shift_the_posterior() {
        let cfg = AgentConfig {
            light_prior: 10,
            dark_prior: 1,
            ..AgentConfig::default()
        };
        let mut biased = BeliefModel::new(&cfg);
        let mut flat = model();
        let pb = biased.evaluate_decision();
        let pf = flat.evaluate_decision();
        assert!(pb < pf, "light-leaning prior must lower p_below_half");
    }
}

#[cfg(test)]
mod neighbors {
    use super::*;

    const T: u64 = 28_800; // default timeout, ticks

    #[test]
    fn first_report_always_counts() {
        let mut m = model();
        let mut t = table(10, T);
        t.ingest(&mut m, PeerId(5), Shade::Light, 0, Tick(0));
        assert_eq!(m.total_evidence(), 1);
        assert_eq!(t.count_active(), 1);
    }

    #[test]
    fn repeated_broadcast_counts_once() {
        let mut m = model();
        let mut t = table(10, T);
        t.ingest(&mut m, PeerId(5), Shade::Light, 7, Tick(0));
        t.ingest(&mut m, PeerId(5), Shade::Light, 7, Tick(1));
        t.ingest(&mut m, PeerId(5), Shade::Light, 7, Tick(2));
        assert_eq!(m.total_evidence(), 1, "same (peer, seq) re-counted");
        assert_eq!(t.count_active(), 1, "duplicate live entries for one peer");
    }

    #[test]
    fn new_sequence_counts_again() {
        let mut m = model();
        let mut t = table(10, T);
        t.ingest(&mut m, PeerId(5), Shade::Light, 7, Tick(0));
        t.ingest(&mut m, PeerId(5), Shade::Dark, 8, Tick(1));
        assert_eq!(m.total_evidence(), 2);
        let (light, dark) = m.counts();
        assert_eq!((light, dark), (1, 1));
    }

    #[test]
    fn capacity_is_never_exceeded() {
        let mut m = model();
        let mut t = table(4, T);
        for i in 1..=20u16 {
            t.ingest(&mut m, PeerId(i), Shade::Light, 0, Tick(i as u64));
        }
        assert_eq!(t.count_active(), 4);
        assert_eq!(m.total_evidence(), 20, "every distinct peer counted once");
    }

    #[test]
    fn full_table_evicts_the_oldest_resident() {
        let mut m = model();
        let mut t = table(3, T);
        t.ingest(&mut m, PeerId(1), Shade::Light, 0, Tick(0)); // A
        t.ingest(&mut m, PeerId(2), Shade::Light, 0, Tick(1)); // B
        t.ingest(&mut m, PeerId(3), Shade::Light, 0, Tick(2)); // C
        t.ingest(&mut m, PeerId(4), Shade::Light, 0, Tick(3)); // D evicts A
        assert_eq!(t.count_active(), 3);
        assert_eq!(m.total_evidence(), 4);

        // B is still resident: a same-seq update must not grow the table or
        // the evidence.
        t.ingest(&mut m, PeerId(2), Shade::Light, 0, Tick(4));
        assert_eq!(t.count_active(), 3);
        assert_eq!(m.total_evidence(), 4);

        // A was evicted: its return takes the insert path and counts as
        // novel even with the sequence number it already reported.
        t.ingest(&mut m, PeerId(1), Shade::Light, 0, Tick(5));
        assert_eq!(t.count_active(), 3);
        assert_eq!(m.total_evidence(), 5);
    }

    #[test]
    fn prune_boundary_is_strict() {
        let mut m = model();
        let mut t = table(4, 100);
        t.ingest(&mut m, PeerId(9), Shade::Dark, 0, Tick(50));

        // Exactly at the timeout: survives.
        t.prune(Tick(150));
        assert_eq!(t.count_active(), 1);

        // One tick past: expired.
        t.prune(Tick(151));
        assert_eq!(t.count_active(), 0);
    }

    #[test]
    fn long_lived_peer_expires_despite_updates() {
        // The timeout is measured from first contact, not last.  A peer that
        // keeps reporting is still expired, then re-admitted on its next
        // report — which is re-counted as novel.  Defect candidate: if the
        // intent was a last-contact lease, this test is the one to change.
        let mut m = model();
        let mut t = table(4, 100);
        t.ingest(&mut m, PeerId(9), Shade::Light, 0, Tick(0));
        for tick in 1..=100 {
            t.ingest(&mut m, PeerId(9), Shade::Light, tick as u16, Tick(tick));
        }
        assert_eq!(m.total_evidence(), 101);

        t.prune(Tick(101));
        assert_eq!(t.count_active(), 0, "continuous updates did not extend the lease");

        // Re-admission re-counts a sequence number the table already saw.
        t.ingest(&mut m, PeerId(9), Shade::Light, 100, Tick(101));
        assert_eq!(m.total_evidence(), 102);
    }

    #[test]
    fn sentinel_peer_is_ignored() {
        let mut m = model();
        let mut t = table(4, T);
        t.ingest(&mut m, PeerId::NONE, Shade::Light, 0, Tick(0));
        assert_eq!(t.count_active(), 0);
        assert_eq!(m.total_evidence(), 0);
    }

    #[test]
    fn capacity_one_churns_deterministically() {
        let mut m = model();
        let mut t = table(1, T);
        t.ingest(&mut m, PeerId(1), Shade::Light, 0, Tick(0));
        t.ingest(&mut m, PeerId(2), Shade::Dark, 0, Tick(1));
        t.ingest(&mut m, PeerId(1), Shade::Light, 0, Tick(2));
        assert_eq!(t.count_active(), 1);
        assert_eq!(m.total_evidence(), 3, "every insert-path report counts");
    }
}
