use serde::Deserialize;

use crate::models::{Candidate, CandidateStatus, JlptLevel, Job, JobCategory, Major};

/// Filters shared by list pages. Every field is optional and blank means "any".
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListQuery {
    pub q: Option<String>,
    pub category: Option<String>,
    pub status: Option<String>,
    pub major: Option<String>,
    pub jlpt: Option<String>,
    pub page: Option<usize>,
}

impl ListQuery {
    pub fn keyword(&self) -> &str {
        self.q.as_deref().map(str::trim).unwrap_or_default()
    }

    pub fn page(&self) -> usize {
        self.page.unwrap_or(1).max(1)
    }

    fn choice<T: std::str::FromStr>(value: &Option<String>) -> Option<T> {
        value
            .as_deref()
            .map(str::trim)
            .filter(|v| !v.is_empty() && *v != "all")
            .and_then(|v| v.parse().ok())
    }

    /// Query string without the page number, for building pager links.
    pub fn without_page(&self) -> String {
        let pairs: Vec<(&str, &str)> = [
            ("q", &self.q),
            ("category", &self.category),
            ("status", &self.status),
            ("major", &self.major),
            ("jlpt", &self.jlpt),
        ]
        .into_iter()
        .filter_map(|(key, value)| {
            value
                .as_deref()
                .map(str::trim)
                .filter(|v| !v.is_empty())
                .map(|v| (key, v))
        })
        .collect();
        serde_urlencoded::to_string(pairs).unwrap_or_default()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub items: Vec<T>,
    /// 1-based.
    pub page: usize,
    pub total_pages: usize,
    pub total: usize,
}

impl<T> Page<T> {
    pub fn has_prev(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }

    pub fn prev(&self) -> usize {
        self.page.saturating_sub(1).max(1)
    }

    pub fn next(&self) -> usize {
        (self.page + 1).min(self.total_pages.max(1))
    }

    pub fn numbers(&self) -> Vec<usize> {
        (1..=self.total_pages).collect()
    }
}

/// Slices an already fetched collection. Out of range pages clamp to the last page.
pub fn paginate<T>(items: Vec<T>, page: usize, per_page: usize) -> Page<T> {
    let per_page = per_page.max(1);
    let total = items.len();
    let total_pages = total.div_ceil(per_page).max(1);
    let page = page.clamp(1, total_pages);

    let items = items
        .into_iter()
        .skip((page - 1) * per_page)
        .take(per_page)
        .collect();

    Page {
        items,
        page,
        total_pages,
        total,
    }
}

/// Case-insensitive; every whitespace separated term must occur in some field.
pub fn matches_keyword(fields: &[&str], keyword: &str) -> bool {
    let haystack: Vec<String> = fields.iter().map(|f| f.to_lowercase()).collect();
    keyword
        .to_lowercase()
        .split_whitespace()
        .all(|term| haystack.iter().any(|field| field.contains(term)))
}

/// Public listings pass `only_open` to hide paused, closed and inactive jobs.
pub fn job_matches(job: &Job, query: &ListQuery, only_open: bool) -> bool {
    let category: Option<JobCategory> = ListQuery::choice(&query.category);
    let keyword = query.keyword();

    (!only_open || job.is_open())
        && category.is_none_or(|c| job.category == c)
        && (keyword.is_empty()
            || matches_keyword(
                &[
                    job.title.as_str(),
                    job.code.as_str(),
                    job.location.as_str(),
                    job.description.as_str(),
                    job.category.label(),
                ],
                keyword,
            ))
}

pub fn filter_jobs(jobs: Vec<Job>, query: &ListQuery, only_open: bool) -> Vec<Job> {
    jobs.into_iter()
        .filter(|job| job_matches(job, query, only_open))
        .collect()
}

pub fn candidate_matches(candidate: &Candidate, query: &ListQuery) -> bool {
    let status: Option<CandidateStatus> = ListQuery::choice(&query.status);
    let major: Option<Major> = ListQuery::choice(&query.major);
    let jlpt: Option<JlptLevel> = ListQuery::choice(&query.jlpt);
    let keyword = query.keyword();

    status.is_none_or(|s| candidate.status == s)
        && major.is_none_or(|m| candidate.major == m)
        && jlpt.is_none_or(|j| candidate.jlpt_level == j)
        && (keyword.is_empty()
            || matches_keyword(
                &[
                    candidate.name.as_str(),
                    candidate.email.as_str(),
                    candidate.phone.as_str(),
                ],
                keyword,
            ))
}

pub fn filter_candidates(candidates: Vec<Candidate>, query: &ListQuery) -> Vec<Candidate> {
    candidates
        .into_iter()
        .filter(|c| candidate_matches(c, query))
        .collect()
}
