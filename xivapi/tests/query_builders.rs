use url::Url;
use xivapi::{serialize_clauses, FilterClause, Language, SearchQuery};

fn base_url() -> Url {
    Url::parse("https://v2.xivapi.com/api/search").unwrap()
}

#[test]
fn raw_filter_string_is_encoded() {
    let url = SearchQuery::new("Item", "*")
        .with_query("Name=\"Clarent\"")
        .add_to_url(&base_url());
    insta::assert_snapshot!(
        url.as_str(),
        @r#"https://v2.xivapi.com/api/search?sheets=Item&fields=*&query=Name%3D%22Clarent%22"#
    );
}

#[test]
fn clauses_are_space_joined_in_query_param() {
    let clauses = vec![
        FilterClause::new("ClassJob.Abbreviation", "=", "BRD"),
        FilterClause::new("ClassJobLevel", "=", "92"),
    ];
    let url = SearchQuery::new("Action", "Name,ClassJobLevel")
        .with_clauses(&clauses)
        .add_to_url(&base_url());
    insta::assert_snapshot!(
        url.as_str(),
        @"https://v2.xivapi.com/api/search?sheets=Action&fields=Name%2CClassJobLevel&query=ClassJob.Abbreviation%3DBRD+ClassJobLevel%3D92"
    );

    let pairs: Vec<(String, String)> = url.query_pairs().into_owned().collect();
    assert_eq!(
        pairs[2],
        (
            "query".to_string(),
            "ClassJob.Abbreviation=BRD ClassJobLevel=92".to_string()
        )
    );
}

#[test]
fn optional_params_are_omitted_by_default() {
    let url = SearchQuery::new("Mount", "*")
        .with_query("Name~\"Chocobo\"")
        .add_to_url(&base_url());
    let query = url.query().unwrap();
    assert!(!query.contains("limit="));
    assert!(!query.contains("language="));
}

#[test]
fn limit_and_language_follow_filter() {
    let url = SearchQuery::new("Item,Mount", "Name")
        .with_query("Name~\"Clarent\"")
        .with_limit(5)
        .with_language(Language::Japanese)
        .add_to_url(&base_url());
    let keys: Vec<String> = url.query_pairs().map(|(k, _)| k.into_owned()).collect();
    assert_eq!(keys, vec!["sheets", "fields", "query", "limit", "language"]);

    let query = url.query().unwrap();
    assert!(query.contains("sheets=Item%2CMount"));
    assert!(query.contains("limit=5"));
    assert!(query.contains("language=ja"));
}

#[test]
fn serialize_clauses_matches_documented_example() {
    let clauses: Vec<FilterClause> = serde_json::from_str(
        r#"[["ClassJob.Abbreviation","=","BRD"],["ClassJobLevel","=","92"]]"#,
    )
    .unwrap();
    assert_eq!(
        serialize_clauses(&clauses),
        "ClassJob.Abbreviation=BRD ClassJobLevel=92"
    );
}
