use super::*;

#[test]
fn parse_number_handles_separators_and_percent() {
    assert!((parse_number("1,624,521") - 1_624_521.0).abs() < f64::EPSILON);
    assert!((parse_number("6 %") - 6.0).abs() < f64::EPSILON);
    assert!((parse_number("3.25") - 3.25).abs() < f64::EPSILON);
    assert!(parse_number("n/a").abs() < f64::EPSILON);
}

#[test]
fn snapshot_matches_grouped_labels_to_values() {
    let text = "Followers\nFollowing\n1624521\n1999\nAvg Likes\nAvg Comments\nAvg Engagement Rate\n101,198\n1,019\n6 %\n";
    let snap = parse_snapshot(text);
    assert_eq!(snap.followers, Some(1_624_521.0));
    assert_eq!(snap.following, Some(1999.0));
    assert_eq!(snap.avg_likes, Some(101_198.0));
    assert_eq!(snap.avg_comments, Some(1019.0));
    assert_eq!(snap.avg_engagement_rate, Some(6.0));
}

#[test]
fn snapshot_missing_values_stay_none() {
    let snap = parse_snapshot("Followers\n12,000\nAvg Likes\n");
    assert_eq!(snap.followers, Some(12_000.0));
    assert_eq!(snap.avg_likes, None);
}

#[test]
fn executive_summary_reads_search_metadata() {
    let text = "\
What You Searched
#margarita
Why You're Searching
To find summer cocktail angles.

Home bartenders want low-effort recipes for parties.

Spicy variants are trending with younger drinkers.";
    let summary = parse_executive_summary(text);
    assert_eq!(summary.search_term, "#margarita");
    assert_eq!(summary.search_purpose, "To find summer cocktail angles.");
    assert_eq!(summary.key_insights.len(), 2);
    assert_eq!(
        summary.overview,
        "Home bartenders want low-effort recipes for parties."
    );
}

#[test]
fn creator_summary_falls_back_to_preamble_topline() {
    let text = "\
Playful cocktail content with a party tone.
What it Means for You
Lean into humor.
Common Themes
Margarita recipes for game day

Behind the bar with friends
What Hits
Reels with music.";
    let summary = parse_creator_summary(text);
    assert_eq!(summary.topline, "Playful cocktail content with a party tone.");
    assert_eq!(summary.what_it_means, "Lean into humor.");
    assert_eq!(summary.common_themes.len(), 2);
    assert_eq!(summary.what_hits, "Reels with music.");
    assert!(summary.what_misses.is_empty());
}

#[test]
fn sponsorship_lists_keep_short_entries() {
    let text = "\
Sponsorship Summary
Mostly spirits and festivals.
Current Categories
Spirits
Music Festivals
This sentence is prose and should be dropped.
Current Companies
Coachella
Casamigos";
    let s = parse_sponsorships(text);
    assert_eq!(s.summary, "Mostly spirits and festivals.");
    assert_eq!(s.categories, vec!["Spirits", "Music Festivals"]);
    assert_eq!(s.companies, vec!["Coachella", "Casamigos"]);
}

#[test]
fn future_sponsorships_are_grouped_by_category() {
    let text = "\
These suggestions build on what already works.
Live Music Venues
Why it Works
Fans already film concerts.
How to Activate
Sponsor a stage.
Film a backstage reel.
Sports Watch Parties
Why it Works
Game days drive group drinking.
How to Activate
Host a bar takeover.";
    let suggestions = parse_future_sponsorships(text);
    assert_eq!(suggestions.len(), 2);
    assert_eq!(suggestions[0].category, "Live Music Venues");
    assert_eq!(suggestions[0].why_it_works, "Fans already film concerts.");
    assert_eq!(
        suggestions[0].how_to_activate,
        vec!["Sponsor a stage.", "Film a backstage reel."]
    );
    assert_eq!(suggestions[1].category, "Sports Watch Parties");
    assert_eq!(suggestions[1].how_to_activate, vec!["Host a bar takeover."]);
}

#[test]
fn statistics_read_labelled_values() {
    let text = "Min Views\n1,200\nMax Views\n2,500,000\nMedian Likes\n340\nAvg Comments\n12.5\n";
    let stats = parse_statistics(text);
    assert!((stats.views.min - 1200.0).abs() < f64::EPSILON);
    assert!((stats.views.max - 2_500_000.0).abs() < f64::EPSILON);
    assert!((stats.likes.median - 340.0).abs() < f64::EPSILON);
    assert!((stats.comments.avg - 12.5).abs() < f64::EPSILON);
}

#[test]
fn most_least_cards_are_split() {
    let text = "\
Most Liked
Caption
Cheers to the weekend
Likes Count
52,000
Comment Count
410
https://www.instagram.com/p/abc
Least Liked
Caption
Monday reminder
Likes Count
90
";
    let (most, least) = split_most_least(text, "Most Liked", "Least Liked");
    let most = most.unwrap();
    assert_eq!(most.caption, "Cheers to the weekend");
    assert!((most.likes - 52_000.0).abs() < f64::EPSILON);
    assert_eq!(most.link, "https://www.instagram.com/p/abc");
    let least = least.unwrap();
    assert_eq!(least.caption, "Monday reminder");
    assert!((least.likes - 90.0).abs() < f64::EPSILON);
}

#[test]
fn how_to_win_reads_territories_and_verbatims() {
    let text = "\
Own the home party moment.
Audience Verbatims
Territory 1
Make hosting effortless with batch cocktails.
Territory 2
Celebrate heritage through family recipes.

this is my go-to for every bbq
cannot wait for summer margs";
    let win = parse_how_to_win(text);
    assert_eq!(win.summary, "Own the home party moment.");
    assert_eq!(win.territories.len(), 2);
    assert_eq!(
        win.territories[1],
        "Celebrate heritage through family recipes."
    );
    assert_eq!(
        win.audience_verbatims,
        vec!["this is my go-to for every bbq", "cannot wait for summer margs"]
    );
}

#[test]
fn hashtag_analysis_collects_findings() {
    let text = "\
People use the tag for brunch posts.
Key Findings
Brunch content dominates the tag.

Spicy margaritas get the most saves.
Opportunities
Partner with brunch spots.
Strategic Actions
Post weekend brunch reels.";
    let analysis = parse_hashtag_analysis(text);
    assert_eq!(analysis.summary, "People use the tag for brunch posts.");
    assert_eq!(analysis.key_findings.len(), 2);
    assert_eq!(analysis.opportunities, vec!["Partner with brunch spots."]);
    assert!(analysis.gaps_risks_unmet_needs.is_empty());
    assert!(analysis.has_findings());
}

#[test]
fn conversations_are_numbered_blocks() {
    let text = "Intro text.\nConversation 1\nHangover cures\nPeople swap tips.\nConversation 2\nCocktail fails\n";
    let convs = parse_interesting_conversations(text);
    assert_eq!(convs.len(), 2);
    assert_eq!(convs[0].title, "Hangover cures");
    assert_eq!(convs[0].description, "People swap tips.");
    assert!(convs[1].description.is_empty());
}

#[test]
fn conversation_map_splits_patterns() {
    let text = "\
Overview of the map.
Relationship Analysis
Food and drink overlap.
Overarching Patterns
Celebration posts cluster on weekends.

Budget cocktails are a recurring thread.";
    let map = parse_conversation_map(text);
    assert_eq!(map.summary, "Overview of the map.");
    assert_eq!(map.relationship_analysis, "Food and drink overlap.");
    assert_eq!(map.overarching_patterns.len(), 2);
}

#[test]
fn titled_blocks_pair_short_titles_with_descriptions() {
    let text = "\
Frozen margs

Slushie machines at home are everywhere this summer.

Tequila tasting flights
Creators compare three tequilas side by side in one video that runs long enough to pass eighty characters.";
    let blocks = parse_titled_blocks(text);
    assert_eq!(blocks.len(), 2);
    assert_eq!(blocks[0].title, "Frozen margs");
    assert_eq!(blocks[1].title, "Tequila tasting flights");
    assert!(blocks[1].description.starts_with("Creators compare"));
}

#[test]
fn archetypes_read_appeal_and_examples() {
    let text = "\
The Home Mixologist
Shares recipes from a home bar.
Appeal
Approachable expertise.
Examples
@barbyhomebar
@shakeitjess
The Party Host
Throws themed parties.";
    let archetypes = parse_creator_archetypes(text);
    assert_eq!(archetypes.len(), 2);
    assert_eq!(archetypes[0].archetype, "The Home Mixologist");
    assert_eq!(archetypes[0].appeal, "Approachable expertise.");
    assert_eq!(archetypes[0].examples, vec!["@barbyhomebar", "@shakeitjess"]);
    assert_eq!(archetypes[1].description, "Throws themed parties.");
}

#[test]
fn brand_mentions_split_per_brand() {
    let text = "\
Patron
Context
Featured in premium cocktail posts.
Sentiment
Positive
Verbatims
so smooth
Casamigos
Context
Celebrity-driven mentions.
Reception
Mixed";
    let mentions = parse_brand_mentions(text);
    assert_eq!(mentions.len(), 2);
    assert_eq!(mentions[0].brand, "Patron");
    assert_eq!(mentions[0].context, "Featured in premium cocktail posts.");
    assert_eq!(mentions[0].sentiment, "Positive");
    assert_eq!(mentions[0].verbatims, vec!["so smooth"]);
    assert_eq!(mentions[1].brand, "Casamigos");
    assert_eq!(mentions[1].reception, "Mixed");
}

#[test]
fn brand_mention_without_context_is_dropped() {
    let mentions = parse_brand_mentions("Lonely Brand\nSentiment\nNeutral\n");
    assert!(mentions.is_empty());
}
