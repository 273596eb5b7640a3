use std::sync::Arc;

use articleparse::neighbor::NoNeighborSignal;
use articleparse::rules::{RuleSet, Score};
use articleparse::stopwords::StopWords;
use articleparse::{analyze_with_options, Analyzer, Error, Options, Section};

const ARTICLE: &str = "<html><head><title>Budget</title></head><body>\
    <div class=\"nav\"><a href=\"/\">Home</a> <a href=\"/politics\">Politics</a> <a href=\"/economy\">Economy</a></div>\
    <div class=\"story\"><p>The finance minister presented the budget to parliament on Wednesday, \
    promising that spending on schools and hospitals would rise while taxes on small firms would fall. \
    Opposition members said the plan was not credible and that the numbers did not add up.</p></div>\
    <footer><span>Copyright 2024 <a href=\"/about\">About us</a></span></footer>\
    </body></html>";

#[test]
fn default_rules_prefer_the_story() {
    let options = Options {
        min_section_len: 20,
        ..Options::default()
    };
    let results = analyze_with_options(ARTICLE, &options);
    let best = results
        .iter()
        .max_by(|a, b| a.probability.total_cmp(&b.probability))
        .expect("article has sections");
    assert!(best.text.contains("finance minister"));
}

#[test]
fn json_options_override_rules() {
    let json = r#"{
        "min_section_len": 20,
        "rules": [
            {"feature": "word_count", "threshold": 10, "comparator": "less_than", "margin": 0}
        ]
    }"#;
    let options = Options::from_json(json).expect("valid options");
    let results = analyze_with_options(ARTICLE, &options);
    let nav = results
        .iter()
        .find(|r| r.text.contains("Politics"))
        .expect("nav section retained");
    let story = results
        .iter()
        .find(|r| r.text.contains("finance minister"))
        .expect("story section retained");
    assert_eq!(nav.probability, 1.0);
    assert_eq!(story.probability, 0.0);
}

#[test]
fn container_tag_is_configurable() {
    let options = Options {
        min_section_len: 5,
        container_tag: "p".to_string(),
        retain_tags: vec!["p".to_string(), "a".to_string()],
        tag_aliases: Vec::new(),
        ..Options::default()
    };
    let html = "<body><div><p>first paragraph</p><p>second paragraph</p></div></body>";
    let results = analyze_with_options(html, &options);
    let texts: Vec<&str> = results.iter().map(|r| r.text.trim()).collect();
    assert_eq!(texts, vec!["first paragraph", "second paragraph"]);
}

#[test]
fn without_aliases_spans_do_not_split() {
    let options = Options {
        min_section_len: 5,
        tag_aliases: Vec::new(),
        ..Options::default()
    };
    let html = "<body><div>one <span>two</span> three</div></body>";
    let results = analyze_with_options(html, &options);
    assert_eq!(results.len(), 1);
    assert!(results[0].text.contains("<span>two</span>"));
}

#[test]
fn invalid_json_options_are_reported() {
    assert!(matches!(Options::from_json("{ not json"), Err(Error::Config(_))));
    assert!(matches!(
        Options::from_json(r#"{"container_tag": ""}"#),
        Err(Error::InvalidOptions(_))
    ));
}

#[test]
fn explicit_no_neighbor_signal_matches_default() {
    let options = Options {
        min_section_len: 20,
        ..Options::default()
    };
    let default = Analyzer::new(options.clone()).analyze(ARTICLE);
    let explicit = Analyzer::new(options)
        .with_neighbor_classifier(NoNeighborSignal)
        .analyze(ARTICLE);
    assert_eq!(default, explicit);
}

#[test]
fn neighbor_can_demote_trailing_section() {
    let options = Options {
        min_section_len: 20,
        ..Options::default()
    };
    let demote_last = |_: &Section, _: Option<&Section>, next: Option<&Section>| {
        if next.is_none() {
            Score::new(0.0, 10.0)
        } else {
            Score::ZERO
        }
    };
    let plain = Analyzer::new(options.clone()).analyze(ARTICLE);
    let demoted = Analyzer::new(options)
        .with_neighbor_classifier(demote_last)
        .analyze(ARTICLE);
    assert_eq!(plain.len(), 3);
    assert!(plain[2].text.contains("Copyright"));
    assert!(demoted[2].probability < plain[2].probability);
    assert_eq!(demoted[..2], plain[..2]);
}

#[test]
fn empty_stopword_set_zeroes_density() {
    let options = Options {
        min_section_len: 20,
        rules: RuleSet::default(),
        ..Options::default()
    };
    let sections = Analyzer::new(options)
        .with_stop_words(Arc::new(StopWords::from_words(Vec::<String>::new())))
        .parse_sections(ARTICLE);
    assert!(sections.iter().all(|s| s.stop_word_density() == 0.0));
}
