use chrono::{Duration, NaiveDateTime, Utc};
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION, LINK, USER_AGENT};
use serde::de::DeserializeOwned;

use crate::constants::GITHUB_API_URL;
use crate::error::{TriageError, TriageResult};
use crate::models::{ApiIssue, IssueRecord, StarredRepo};

pub struct GitHubClient {
    client: reqwest::Client,
}

impl GitHubClient {
    pub fn new(token: String) -> TriageResult<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/vnd.github+json"));
        headers.insert(USER_AGENT, HeaderValue::from_static("ghtriage"));
        headers.insert(
            AUTHORIZATION,
            HeaderValue::from_str(&format!("token {}", token))
                .map_err(|_| TriageError::InvalidInput("Invalid token format".to_string()))?,
        );

        let client = reqwest::Client::builder().default_headers(headers).build()?;

        Ok(Self { client })
    }

    /// Fetch one page of results and the URL of the next page, if the
    /// response carries a Link header with rel="next".
    async fn get_page<T: DeserializeOwned>(
        &self,
        url: &str,
        query: &[(&str, String)],
    ) -> TriageResult<(Vec<T>, Option<String>)> {
        let response = self.client.get(url).query(query).send().await?;

        if !response.status().is_success() {
            return Err(TriageError::ApiError(format!(
                "HTTP {} for {}",
                response.status(),
                url
            )));
        }

        let next = response
            .headers()
            .get(LINK)
            .and_then(|v| v.to_str().ok())
            .and_then(next_page_link);

        let items = response.json().await?;
        Ok((items, next))
    }

    /// Full names of every repository the authenticated user has starred.
    pub async fn get_starred_repos(&self) -> TriageResult<Vec<String>> {
        let mut url = format!("{}/user/starred", GITHUB_API_URL);
        let mut all_repos = Vec::new();

        loop {
            let (repos, next): (Vec<StarredRepo>, _) = self
                .get_page(&url, &[("per_page", "100".to_string())])
                .await?;
            all_repos.extend(repos.into_iter().map(|r| r.full_name));
            match next {
                Some(next_url) => url = next_url,
                None => break,
            }
        }

        Ok(all_repos)
    }

    /// Open, unassigned, non-PR issues from one repository, created within
    /// the lookback window, capped at `max_issues`.
    pub async fn get_issues(
        &self,
        repo_full_name: &str,
        max_issues: usize,
        days: i64,
    ) -> TriageResult<Vec<IssueRecord>> {
        let cutoff = Utc::now().naive_utc() - Duration::days(days);
        let query = [
            ("state", "open".to_string()),
            ("sort", "updated".to_string()),
            ("direction", "desc".to_string()),
            ("per_page", "100".to_string()),
            ("since", cutoff.format("%Y-%m-%dT%H:%M:%SZ").to_string()),
        ];

        let mut url = format!("{}/repos/{}/issues", GITHUB_API_URL, repo_full_name);
        let mut all_issues = Vec::new();

        loop {
            let (issues, next): (Vec<ApiIssue>, _) = self.get_page(&url, &query).await?;

            for issue in issues {
                if issue.pull_request.is_some() || issue.assignee.is_some() {
                    continue;
                }
                // The API's `since` matches on update time; also drop issues
                // created before the window
                let created_in_window =
                    NaiveDateTime::parse_from_str(&issue.created_at, "%Y-%m-%dT%H:%M:%SZ")
                        .map(|created| created >= cutoff)
                        .unwrap_or(false);
                if !created_in_window {
                    continue;
                }
                all_issues.push(issue.into_record(repo_full_name));
                if all_issues.len() >= max_issues {
                    return Ok(all_issues);
                }
            }

            match next {
                Some(next_url) => url = next_url,
                None => break,
            }
        }

        Ok(all_issues)
    }
}

/// Pull the rel="next" target out of an RFC 5988 Link header.
fn next_page_link(link_header: &str) -> Option<String> {
    for link in link_header.split(", ") {
        let mut parts = link.splitn(2, "; ");
        let url = parts.next()?;
        if parts.next() == Some(r#"rel="next""#) {
            return Some(url.trim_start_matches('<').trim_end_matches('>').to_string());
        }
    }
    None
}
