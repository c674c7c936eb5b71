use cribbage_rs::deck::Deck;
use cribbage_rs::scoring::{score_hand, Category, Score};
use cribbage_rs::simulate::{deal_show, SimConfig, Simulator};
use cribbage_rs::stats::Stats;

#[test]
fn stats_agree_with_every_dealt_show() {
    let mut sim = Simulator::new(Some(2024));
    let mut recount = Stats::default();
    let mut max = 0u8;
    sim.run_with(2_000, |_, shown| {
        assert_eq!(score_hand(&shown.hand, shown.starter), shown.score);
        recount.record(shown.hand, shown.starter, shown.score);
        max = max.max(shown.score.total());
    })
    .unwrap();
    let stats = sim.stats();
    assert_eq!(stats.hands(), 2_000);
    assert_eq!(stats.total(), recount.total());
    assert_eq!(stats.max(), Some(max));
    assert_eq!(stats.histogram(), recount.histogram());
    let per_category: u64 = Category::ALL.iter().map(|c| stats.category_total(*c)).sum();
    assert_eq!(per_category, stats.total());
}

#[test]
fn mean_is_in_a_plausible_range() {
    // expected show value is about 4.77
    let mut sim = Simulator::new(Some(1));
    let stats = sim.run(20_000).unwrap();
    assert!(stats.mean() > 4.0 && stats.mean() < 5.5, "mean {}", stats.mean());
    assert!(stats.max().unwrap() <= Score::MAX);
}

#[test]
fn same_seed_same_summary() {
    let cfg = SimConfig { hands: 300, seed: Some(77) };
    let a = Simulator::from_config(&cfg).run(cfg.hands).unwrap().to_string();
    let b = Simulator::from_config(&cfg).run(cfg.hands).unwrap().to_string();
    assert_eq!(a, b);
    assert!(a.starts_with("Avg = "));
}

#[test]
fn deal_show_reshuffles_each_time() {
    let mut deck = Deck::seeded(4);
    for _ in 0..20 {
        let _ = deal_show(&mut deck).unwrap();
        assert_eq!(deck.dealt(), 5);
    }
}

#[test]
fn merged_stats_equal_one_long_run() {
    let mut a = Simulator::new(Some(9));
    let first = a.run(100).unwrap().clone();
    a.reset_stats();
    let second = a.run(100).unwrap().clone();

    let mut merged = first.clone();
    merged.merge(&second);
    assert_eq!(merged.hands(), 200);
    assert_eq!(merged.total(), first.total() + second.total());
    assert_eq!(merged.max(), first.max().max(second.max()));
}
