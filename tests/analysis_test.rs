use articleparse::rules::{classify, ClassificationRule, Comparator, RuleSet, Threshold};
use articleparse::stopwords::StopWords;
use articleparse::{analyze, analyze_with_options, Analyzer, Feature, Options, Section};

const SIXTY_WORDS: &str = "The old harbour town changed slowly over the years as the fishing fleet \
    shrank and the tourists arrived. Families who had worked the boats for generations opened \
    cafes and small hotels along the water. Some of them still keep a boat, and on calm mornings \
    they go out before dawn to set their nets near the rocks below the cliffs.";

fn with_min_len(min_section_len: usize) -> Options {
    Options {
        min_section_len,
        ..Options::default()
    }
}

#[test]
fn prose_fixture_has_sixty_words() {
    assert_eq!(SIXTY_WORDS.split_whitespace().count(), 60);
}

#[test]
fn nav_block_scores_below_prose_block() {
    let html = format!(
        "<body><div>Short nav link <a>Home</a></div><div>{SIXTY_WORDS}</div></body>"
    );
    let results = analyze_with_options(&html, &with_min_len(20));

    assert_eq!(results.len(), 2);
    assert!(results[0].text.contains("Short nav link"));
    assert!(results[1].text.contains("harbour town"));
    assert!(results[1].probability > 0.6, "prose scored {}", results[1].probability);
    assert!(results[0].probability < results[1].probability);
}

#[test]
fn anchor_rule_fails_for_link_dominated_block() {
    let sections = Analyzer::new(with_min_len(20)).parse_sections(
        "<body><div><a>Home</a> <a>World</a> <a>Business</a> <a>Sport</a></div></body>",
    );
    assert_eq!(sections.len(), 1);
    assert!(sections[0].anchor_density() > 0.333);

    let anchor_only = RuleSet::new(vec![ClassificationRule::new(
        Feature::AnchorDensity,
        Threshold::Scalar(0.333),
        Comparator::LessThan,
        0.10,
    )]);
    assert_eq!(classify(&sections[0], &anchor_only).score, 0.0);
}

#[test]
fn results_are_in_ascending_position_order() {
    let mut html = String::from("<body>");
    for i in 0..12 {
        if i % 3 == 0 {
            html.push_str("<div><a>Home</a> <a>About</a> <a>Contact</a></div>");
        } else {
            html.push_str(&format!("<span>{SIXTY_WORDS}</span>"));
        }
    }
    html.push_str("</body>");

    let results = analyze_with_options(&html, &with_min_len(20));
    assert_eq!(results.len(), 12);
    assert!(results.windows(2).all(|w| w[0].position < w[1].position));
}

#[test]
fn positions_skip_dropped_fragments() {
    let html = format!("<body><div>x</div><div>{SIXTY_WORDS}</div></body>");
    let results = analyze_with_options(&html, &with_min_len(20));
    assert_eq!(results.len(), 1);
    // "", "x", "", prose, ""
    assert_eq!(results[0].position, 3);
}

#[test]
fn stopword_density_just_inside_range_scores_full_point() {
    let text = format!("{}{}", "the ".repeat(31), "harbour ".repeat(69));
    let section = Section::new(&text, 0, &StopWords::english());
    assert!((section.stop_word_density() - 0.31).abs() < 1e-12);

    let rules = RuleSet::new(vec![ClassificationRule::new(
        Feature::StopWordDensity,
        Threshold::Range(0.30, 0.566),
        Comparator::BetweenExclusive,
        0.02,
    )]);
    assert_eq!(classify(&section, &rules).score, 1.0);
}

#[test]
fn stopword_density_on_lower_bound_scores_partial_point() {
    let section = Section::new(
        "the cat and dog of red blue green pink gray",
        0,
        &StopWords::english(),
    );
    assert_eq!(section.stop_word_density(), 0.3);

    let rules = RuleSet::new(vec![ClassificationRule::new(
        Feature::StopWordDensity,
        Threshold::Range(0.30, 0.566),
        Comparator::BetweenExclusive,
        0.02,
    )]);
    assert_eq!(classify(&section, &rules).score, 0.5);
}

#[test]
fn unclosed_navigation_links_keep_density_in_range() {
    let html = "<body><div><a href=1>Home <a href=2>News <a href=3>Sport \
        <a href=4>World</a></div></body>";
    let sections = Analyzer::new(with_min_len(5)).parse_sections(html);
    assert_eq!(sections.len(), 1);
    assert_eq!(sections[0].text(), " Home  News  Sport  World ");
    assert!((0.0..=1.0).contains(&sections[0].anchor_density()));
}

#[test]
fn document_without_body_yields_no_sections() {
    let html = format!("<html><div>{SIXTY_WORDS}</div></html>");
    assert!(analyze_with_options(&html, &with_min_len(20)).is_empty());
}

#[test]
fn spans_act_as_section_boundaries() {
    let html = format!("<body><span>{SIXTY_WORDS}</span><span>{SIXTY_WORDS}</span></body>");
    let results = analyze_with_options(&html, &with_min_len(20));
    assert_eq!(results.len(), 2);
}

#[test]
fn markup_inside_sections_is_removed() {
    let html = "<body><div><p>First <b>bold</b> and <em>emphasised</em> words, \
        with a <a href=\"/more\" class=\"x\">link</a> inside.</p></div></body>";
    let results = analyze_with_options(html, &with_min_len(20));
    assert_eq!(results.len(), 1);
    let text = &results[0].text;
    assert!(!text.contains('<'));
    assert!(text.contains("bold"));
    assert!(text.contains("link"));
}

#[test]
fn entities_are_decoded_in_section_text() {
    let html = "<body><div>Fish &amp; chips &mdash; &ldquo;best in town&rdquo;</div></body>";
    let results = analyze_with_options(html, &with_min_len(10));
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].text, "Fish & chips - \"best in town\"");
}

#[test]
fn script_text_never_reaches_sections() {
    let html = format!(
        "<body><div>{SIXTY_WORDS}<script>document.write('tracking pixel here');</script></div></body>"
    );
    let results = analyze_with_options(&html, &with_min_len(20));
    assert_eq!(results.len(), 1);
    assert!(!results[0].text.contains("tracking"));
}

#[test]
fn probabilities_stay_in_unit_interval() {
    let html = format!(
        "<body><div>{SIXTY_WORDS}</div><div><a>a</a><a>b</a><a>c</a> and some more words here</div>\
         <div>the the the the the the the the the the the the the the</div></body>"
    );
    for result in analyze_with_options(&html, &with_min_len(5)) {
        assert!((0.0..=1.0).contains(&result.probability), "{result:?}");
    }
}

#[test]
fn default_minimum_drops_short_blocks() {
    let html = format!("<body><div>Too short to matter</div><div>{SIXTY_WORDS}</div></body>");
    let results = analyze(&html);
    assert_eq!(results.len(), 1);
    assert!(results[0].text.contains("harbour"));
}
