//! HTTP client for the aggregation backend
//!
//! One GET per call, no retry. Bodies are decoded into the typed schema and
//! validated before they are handed out.

use super::schema::{
    Areas, ComprehensiveAnalysis, CourseDetail, DashboardData, ExtremesResult,
    InstitutionalComparison, LevelComparison, Metadata, PrioritiesResponse, SimilarInstitutions,
    Validate,
};
use crate::config::Config;
use crate::error::{FetchError, FetchResult};
use serde::de::DeserializeOwned;
use std::fmt;

/// Backend endpoints the dashboard consumes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    Areas,
    Metadata,
    DashboardData,
    Comparisons,
    ComprehensiveAnalysis,
    ImprovementPriorities,
    InstitutionalComparison,
    Extremes,
    SimilarInstitutions,
    CourseDetail,
}

impl Endpoint {
    pub fn path(&self) -> &'static str {
        match self {
            Self::Areas => "areas",
            Self::Metadata => "metadata",
            Self::DashboardData => "dashboard-data",
            Self::Comparisons => "comparisons",
            Self::ComprehensiveAnalysis => "comprehensive-analysis",
            Self::ImprovementPriorities => "improvement-priorities",
            Self::InstitutionalComparison => "institutional-comparison",
            Self::Extremes => "extremes",
            Self::SimilarInstitutions => "similar-institutions",
            Self::CourseDetail => "course-detail",
        }
    }

    /// Whether the backend rejects the request without `?area=`
    pub fn requires_area(&self) -> bool {
        matches!(self, Self::Extremes | Self::CourseDetail)
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

/// Client for the ENADE aggregation API
#[derive(Clone)]
pub struct ApiClient {
    client: reqwest::Client,
    config: Config,
}

impl ApiClient {
    /// Create a client honoring the configured base URL and timeout
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout())
            .build()?;

        Ok(Self {
            client,
            config: config.clone(),
        })
    }

    /// URL an endpoint resolves to, without query
    pub fn url(&self, endpoint: Endpoint) -> String {
        self.config.endpoint_url(endpoint.path())
    }

    /// GET an endpoint and decode it into `T`
    pub async fn get<T>(&self, endpoint: Endpoint, area: Option<&str>) -> FetchResult<T>
    where
        T: DeserializeOwned + Validate,
    {
        let name = endpoint.path().to_string();

        if endpoint.requires_area() && area.is_none() {
            return Err(FetchError::MissingArea { endpoint: name });
        }

        let url = self.url(endpoint);
        let mut request = self.client.get(&url);
        if let Some(area) = area {
            request = request.query(&[("area", area)]);
        }

        log::debug!("GET {} (area: {:?})", url, area);

        let response = request.send().await.map_err(|source| FetchError::Network {
            endpoint: name.clone(),
            source,
        })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                endpoint: name,
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await.map_err(|source| FetchError::Network {
            endpoint: name.clone(),
            source,
        })?;

        let payload: T = serde_json::from_slice(&body).map_err(|source| FetchError::Decode {
            endpoint: name.clone(),
            source,
        })?;

        payload
            .validate()
            .map_err(|reason| FetchError::Schema { endpoint: name, reason })?;

        Ok(payload)
    }

    pub async fn areas(&self) -> FetchResult<Areas> {
        self.get(Endpoint::Areas, None).await
    }

    pub async fn metadata(&self) -> FetchResult<Metadata> {
        self.get(Endpoint::Metadata, None).await
    }

    pub async fn dashboard_data(&self) -> FetchResult<DashboardData> {
        self.get(Endpoint::DashboardData, None).await
    }

    /// Four-tier comparison; without an area the backend serves its overall aggregate
    pub async fn comparisons(&self, area: Option<&str>) -> FetchResult<LevelComparison> {
        self.get(Endpoint::Comparisons, area).await
    }

    pub async fn comprehensive_analysis(&self, area: Option<&str>) -> FetchResult<ComprehensiveAnalysis> {
        self.get(Endpoint::ComprehensiveAnalysis, area).await
    }

    pub async fn improvement_priorities(&self, area: Option<&str>) -> FetchResult<PrioritiesResponse> {
        self.get(Endpoint::ImprovementPriorities, area).await
    }

    pub async fn institutional_comparison(
        &self,
        area: Option<&str>,
    ) -> FetchResult<InstitutionalComparison> {
        self.get(Endpoint::InstitutionalComparison, area).await
    }

    pub async fn extremes(&self, area: &str) -> FetchResult<ExtremesResult> {
        self.get(Endpoint::Extremes, Some(area)).await
    }

    pub async fn similar_institutions(&self, area: Option<&str>) -> FetchResult<SimilarInstitutions> {
        self.get(Endpoint::SimilarInstitutions, area).await
    }

    pub async fn course_detail(&self, area: &str) -> FetchResult<CourseDetail> {
        self.get(Endpoint::CourseDetail, Some(area)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_urls() {
        let client = ApiClient::new(&Config::default()).unwrap();
        assert_eq!(
            client.url(Endpoint::ImprovementPriorities),
            "http://localhost:5000/api/enade/improvement-priorities"
        );
        assert_eq!(client.url(Endpoint::Areas), "http://localhost:5000/api/enade/areas");
    }

    #[test]
    fn test_requires_area() {
        assert!(Endpoint::Extremes.requires_area());
        assert!(Endpoint::CourseDetail.requires_area());
        assert!(!Endpoint::Comparisons.requires_area());
    }

    #[tokio::test]
    async fn test_missing_area_short_circuits() {
        let client = ApiClient::new(&Config::default()).unwrap();
        let result = client.get::<ExtremesResult>(Endpoint::Extremes, None).await;
        assert!(matches!(result, Err(FetchError::MissingArea { .. })));
    }
}
