//! End-to-end scenarios over the full analysis pipeline.

use qfd_analysis::{
    analyze, analyze_correlations, ChallengeBand, CorrelationImpact, ImportanceBand,
    PriorityScorer,
};
use qfd_core::types::{
    Correlation, CustomerReqId, CustomerRequirement, Relationship, RelationshipStrength,
    TechReqId, TechnicalCorrelation, TechnicalRequirement,
};
use qfd_core::ProjectSnapshot;

fn customer(id: &str, importance: u8) -> CustomerRequirement {
    CustomerRequirement {
        id: CustomerReqId::from(id),
        description: format!("customer {id}"),
        importance,
        competitor_ratings: Vec::new(),
    }
}

fn technical(id: &str, difficulty: u8) -> TechnicalRequirement {
    TechnicalRequirement {
        id: TechReqId::from(id),
        description: format!("technical {id}"),
        unit: "ms".to_string(),
        target_value: "<200".to_string(),
        difficulty,
    }
}

fn relationship(customer: &str, technical: &str, weight: u8) -> Relationship {
    Relationship {
        customer: CustomerReqId::from(customer),
        technical: TechReqId::from(technical),
        strength: RelationshipStrength::from_weight(weight).unwrap(),
    }
}

/// One customer requirement (importance 5) strongly related to one technical
/// requirement (difficulty 3): raw 45, normalized 100, challenge Critical,
/// importance High.
#[test]
fn scenario_a_single_strong_relationship() {
    let snapshot = ProjectSnapshot {
        customer_requirements: vec![customer("cr-1", 5)],
        technical_requirements: vec![technical("tr-1", 3)],
        relationships: vec![relationship("cr-1", "tr-1", 9)],
        ..Default::default()
    };
    snapshot.validate().unwrap();

    let analysis = analyze(&snapshot);
    let target = &analysis.targets[0];
    assert_eq!(target.score, 45);
    assert!((target.normalized_priority - 100.0).abs() < 1e-10);
    // challenge score: 3×20 + 100×0.3 = 90
    assert_eq!(target.challenge, ChallengeBand::Critical);
    assert_eq!(target.importance, ImportanceBand::High);
}

/// Scores 60 and 40 split the weight 60%/40%.
#[test]
fn scenario_b_weights_split_the_total() {
    let snapshot = ProjectSnapshot {
        customer_requirements: vec![
            customer("cr-a", 5),
            customer("cr-b", 5),
            customer("cr-c", 4),
            customer("cr-d", 4),
        ],
        technical_requirements: vec![technical("tr-1", 2), technical("tr-2", 2)],
        relationships: vec![
            // tr-1: 5×9 + 5×3 = 60; tr-2: 4×1 + 4×9 = 40.
            relationship("cr-a", "tr-1", 9),
            relationship("cr-b", "tr-1", 3),
            relationship("cr-c", "tr-2", 1),
            relationship("cr-d", "tr-2", 9),
        ],
        ..Default::default()
    };

    let priorities = PriorityScorer::score(&snapshot);
    assert_eq!(priorities[0].score, 60);
    assert_eq!(priorities[1].score, 40);

    let normalized = qfd_analysis::normalize_weights(&priorities);
    assert!((normalized[0].relative_weight - 60.0).abs() < 1e-10);
    assert!((normalized[1].relative_weight - 40.0).abs() < 1e-10);
}

/// Strong-positive pair with raw scores 30 + 25 (> 50) gets the urgent
/// bundle-together recommendation.
#[test]
fn scenario_c_strong_positive_pair_above_threshold() {
    let snapshot = ProjectSnapshot {
        customer_requirements: vec![
            customer("cr-1", 5),
            customer("cr-2", 5),
            customer("cr-3", 1),
            customer("cr-4", 1),
        ],
        technical_requirements: vec![technical("tr-a", 3), technical("tr-b", 3)],
        relationships: vec![
            // tr-a: 5×3 + 5×3 = 30; tr-b: 5×3 + 1×9 + 1×1 = 25.
            relationship("cr-1", "tr-a", 3),
            relationship("cr-2", "tr-a", 3),
            relationship("cr-1", "tr-b", 3),
            relationship("cr-3", "tr-b", 9),
            relationship("cr-4", "tr-b", 1),
        ],
        correlations: vec![
            TechnicalCorrelation::new("tr-a", "tr-b", Correlation::StrongPositive).unwrap(),
        ],
        ..Default::default()
    };
    snapshot.validate().unwrap();

    let analysis = analyze(&snapshot);
    assert_eq!(analysis.insights.len(), 1);
    let insight = &analysis.insights[0];
    assert_eq!(insight.first_score + insight.second_score, 55);
    assert!(insight.recommendation.contains("HIGH PRIORITY"));
    assert!(insight.recommendation.contains("maximum impact"));
}

/// A requirement with no correlation records is Isolated with zero counts.
#[test]
fn scenario_d_uncorrelated_requirement_is_isolated() {
    let snapshot = ProjectSnapshot {
        customer_requirements: vec![customer("cr-1", 3)],
        technical_requirements: vec![technical("tr-1", 2)],
        relationships: vec![relationship("cr-1", "tr-1", 3)],
        ..Default::default()
    };

    let analysis = analyze(&snapshot);
    let correlation = &analysis.targets[0].correlation;
    assert_eq!(correlation.impact, CorrelationImpact::Isolated);
    assert_eq!(correlation.impact.name(), "Isolated");
    assert_eq!(correlation.positive_count, 0);
    assert_eq!(correlation.negative_count, 0);
}

/// No relationships at all: every weight stays 0, nothing divides by zero.
#[test]
fn scenario_e_zero_total_score() {
    let snapshot = ProjectSnapshot {
        customer_requirements: vec![customer("cr-1", 5)],
        technical_requirements: vec![technical("tr-1", 3), technical("tr-2", 4)],
        ..Default::default()
    };

    let analysis = analyze(&snapshot);
    for priority in &analysis.priorities {
        assert_eq!(priority.score, 0);
        assert_eq!(priority.relative_weight, 0.0);
    }
    for target in &analysis.targets {
        assert_eq!(target.normalized_priority, 0.0);
        assert_eq!(target.importance, ImportanceBand::Low);
    }
}

/// The bundle for roof-only views matches the full analysis.
#[test]
fn correlation_bundle_matches_full_analysis() {
    let snapshot = ProjectSnapshot {
        customer_requirements: vec![customer("cr-1", 5)],
        technical_requirements: vec![technical("tr-a", 3), technical("tr-b", 4)],
        relationships: vec![
            relationship("cr-1", "tr-a", 9),
            relationship("cr-1", "tr-b", 3),
        ],
        correlations: vec![
            TechnicalCorrelation::new("tr-a", "tr-b", Correlation::Negative).unwrap(),
        ],
        ..Default::default()
    };

    let full = analyze(&snapshot);
    let bundle = analyze_correlations(&snapshot);
    assert_eq!(bundle.priorities, full.priorities);
    assert_eq!(bundle.insights, full.insights);
}

/// The full analysis serializes to JSON and back without loss.
#[test]
fn analysis_round_trips_through_json() {
    let snapshot = ProjectSnapshot {
        customer_requirements: vec![customer("cr-1", 5)],
        technical_requirements: vec![technical("tr-a", 3), technical("tr-b", 2)],
        relationships: vec![relationship("cr-1", "tr-a", 9)],
        correlations: vec![
            TechnicalCorrelation::new("tr-a", "tr-b", Correlation::Positive).unwrap(),
        ],
        ..Default::default()
    };

    let analysis = analyze(&snapshot);
    let json = serde_json::to_string(&analysis).unwrap();
    let back: qfd_analysis::QfdAnalysis = serde_json::from_str(&json).unwrap();
    assert_eq!(back, analysis);
}

/// Re-running the engine on the same snapshot yields identical output.
#[test]
fn analysis_is_deterministic() {
    let snapshot = ProjectSnapshot {
        customer_requirements: vec![customer("cr-1", 5), customer("cr-2", 2)],
        technical_requirements: vec![technical("tr-a", 4), technical("tr-b", 1)],
        relationships: vec![
            relationship("cr-1", "tr-a", 9),
            relationship("cr-2", "tr-b", 3),
        ],
        correlations: vec![
            TechnicalCorrelation::new("tr-a", "tr-b", Correlation::StrongNegative).unwrap(),
        ],
        competitor_names: vec!["Acme".to_string()],
        ..Default::default()
    };

    assert_eq!(analyze(&snapshot), analyze(&snapshot));
}

/// End-to-end: a snapshot with every record kind produces a coherent report.
#[test]
fn full_pipeline_smoke() {
    qfd_core::logging::init_tracing();

    let snapshot = ProjectSnapshot {
        customer_requirements: vec![
            CustomerRequirement {
                competitor_ratings: vec![3, 4],
                ..customer("cr-fast", 5)
            },
            CustomerRequirement {
                competitor_ratings: vec![4, 2],
                ..customer("cr-stable", 4)
            },
        ],
        technical_requirements: vec![
            technical("tr-latency", 3),
            technical("tr-errors", 4),
            technical("tr-docs", 1),
        ],
        relationships: vec![
            relationship("cr-fast", "tr-latency", 9),
            relationship("cr-stable", "tr-errors", 9),
            relationship("cr-fast", "tr-errors", 3),
        ],
        correlations: vec![
            TechnicalCorrelation::new("tr-latency", "tr-errors", Correlation::Negative).unwrap(),
        ],
        competitor_names: vec!["Acme".to_string(), "Globex".to_string()],
    };
    snapshot.validate().unwrap();

    let analysis = analyze(&snapshot);

    assert_eq!(analysis.priorities.len(), 3);
    let weight_sum: f64 = analysis.priorities.iter().map(|p| p.relative_weight).sum();
    assert!((weight_sum - 100.0).abs() < 1e-9);

    // tr-latency: 45; tr-errors: 36 + 15 = 51; tr-docs: 0.
    assert_eq!(analysis.priorities[0].score, 45);
    assert_eq!(analysis.priorities[1].score, 51);
    assert_eq!(analysis.priorities[2].score, 0);

    // The unrelated requirement is isolated; the correlated pair is not.
    assert_eq!(
        analysis.targets[2].correlation.impact,
        CorrelationImpact::Isolated
    );
    assert_eq!(analysis.targets[0].correlation.negative_count, 1);

    assert_eq!(analysis.insights.len(), 1);
    assert_eq!(analysis.competitor_profiles.len(), 2);
    assert_eq!(analysis.competitive_gaps.len(), 2);
}
