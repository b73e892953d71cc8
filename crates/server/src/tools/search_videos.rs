//! search_videos tool implementation.
//!
//! Searches the spreadsheet-backed video catalog, reloading it first when the
//! cached copy is older than the configured TTL.

use rmcp::{ErrorData as McpError, model::*};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use vidcat_core::{AppConfig, FreshnessCache, VideoRecord, search};

/// Input parameters for search_videos tool.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct SearchVideosParams {
    /// Free-text query matched case-insensitively against title and description.
    pub query: String,

    /// Reload the catalog from the sheet before searching, ignoring the cache age.
    #[serde(default = "default_false")]
    pub force_refresh: bool,
}

fn default_false() -> bool {
    false
}

/// Output structure for search_videos tool.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct SearchVideosOutput {
    /// Matching videos in catalog order.
    pub videos: Vec<VideoRecord>,
}

/// Implementation of the search_videos tool.
///
/// A source failure is returned as an error, never as an empty result.
pub async fn search_videos_impl(
    catalog: &FreshnessCache, config: &AppConfig, params: SearchVideosParams,
) -> Result<CallToolResult, McpError> {
    let rows = if params.force_refresh { catalog.refresh().await? } else { catalog.ensure_fresh().await? };

    let videos = search(&params.query, &rows, config.max_results, &config.columns());

    tracing::debug!(query = %params.query, catalog_rows = rows.len(), matches = videos.len(), "search_videos");

    let output = SearchVideosOutput { videos };

    Ok(CallToolResult::success(vec![Content::text(
        serde_json::to_string_pretty(&output).unwrap_or_default(),
    )]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use vidcat_core::{CsvSource, Error};

    const CATALOG: &str = "\
\"OU Sooners videos\",Description,URL
Baker Mayfield TD,2017 game,http://a
Kickoff,,
Bedlam recap,Baker throws for 400,http://c
Red River Showdown,Baker vs Texas,http://d
Spring game,,http://e
";

    struct StaticSource {
        body: Result<String, Error>,
        calls: AtomicUsize,
    }

    impl StaticSource {
        fn ok(body: &str) -> Arc<Self> {
            Arc::new(Self { body: Ok(body.to_string()), calls: AtomicUsize::new(0) })
        }

        fn failing() -> Arc<Self> {
            Arc::new(Self { body: Err(Error::SourceUnavailable("status 500".into())), calls: AtomicUsize::new(0) })
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl CsvSource for StaticSource {
        async fn fetch_csv(&self) -> Result<String, Error> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.body.clone()
        }
    }

    fn parse_output(result: &CallToolResult) -> SearchVideosOutput {
        let text = &result.content[0].as_text().expect("text content").text;
        serde_json::from_str(text).expect("valid output json")
    }

    fn params(query: &str) -> SearchVideosParams {
        SearchVideosParams { query: query.into(), ..Default::default() }
    }

    #[tokio::test]
    async fn test_search_returns_bounded_matches() {
        let source = StaticSource::ok(CATALOG);
        let catalog = FreshnessCache::new(source.clone(), 900);
        let config = AppConfig { max_results: 2, ..Default::default() };

        let result = search_videos_impl(&catalog, &config, params("baker")).await.unwrap();
        let output = parse_output(&result);

        assert_eq!(output.videos.len(), 2);
        assert_eq!(output.videos[0].title, "Baker Mayfield TD");
        assert_eq!(output.videos[0].description, "2017 game");
        assert_eq!(output.videos[1].url, "http://c");
    }

    #[tokio::test]
    async fn test_repeated_searches_hit_cache() {
        let source = StaticSource::ok(CATALOG);
        let catalog = FreshnessCache::new(source.clone(), 900);
        let config = AppConfig::default();

        search_videos_impl(&catalog, &config, params("baker")).await.unwrap();
        search_videos_impl(&catalog, &config, params("spring")).await.unwrap();

        assert_eq!(source.calls(), 1);
    }

    #[tokio::test]
    async fn test_force_refresh_reloads() {
        let source = StaticSource::ok(CATALOG);
        let catalog = FreshnessCache::new(source.clone(), 900);
        let config = AppConfig::default();

        search_videos_impl(&catalog, &config, params("baker")).await.unwrap();
        let forced = SearchVideosParams { query: "baker".into(), force_refresh: true };
        search_videos_impl(&catalog, &config, forced).await.unwrap();

        assert_eq!(source.calls(), 2);
    }

    #[tokio::test]
    async fn test_empty_query_returns_no_videos() {
        let catalog = FreshnessCache::new(StaticSource::ok(CATALOG), 900);
        let result = search_videos_impl(&catalog, &AppConfig::default(), params("  ")).await.unwrap();

        assert!(parse_output(&result).videos.is_empty());
    }

    #[tokio::test]
    async fn test_source_failure_is_an_error() {
        let catalog = FreshnessCache::new(StaticSource::failing(), 900);
        let result = search_videos_impl(&catalog, &AppConfig::default(), params("baker")).await;

        let err = result.unwrap_err();
        assert_eq!(err.code.0, -32020);
    }

    #[tokio::test]
    async fn test_custom_columns_from_config() {
        let csv = "Name,Notes,Link\nSpring game,scrimmage,http://s\n";
        let catalog = FreshnessCache::new(StaticSource::ok(csv), 900);
        let config = AppConfig {
            title_column: "Name".into(),
            description_column: "Notes".into(),
            url_column: "Link".into(),
            ..Default::default()
        };

        let result = search_videos_impl(&catalog, &config, params("scrimmage")).await.unwrap();
        let output = parse_output(&result);

        assert_eq!(output.videos.len(), 1);
        assert_eq!(output.videos[0].url, "http://s");
    }

    #[test]
    fn test_params_default_force_refresh() {
        let params: SearchVideosParams = serde_json::from_str(r#"{"query":"baker"}"#).unwrap();
        assert_eq!(params.query, "baker");
        assert!(!params.force_refresh);
    }
}
