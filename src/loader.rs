//! Loader - runs fetches as tokio tasks and reports back over a channel
//!
//! Every request is tagged with the generation that issued it. The
//! controller drops results from older generations, and `cancel_stale`
//! aborts their tasks so they stop holding connections.

use crate::api::{
    ApiClient, Areas, ComprehensiveAnalysis, DashboardData, ExtremesResult,
    InstitutionalComparison, LevelComparison, PrioritiesResponse, SimilarInstitutions,
};
use crate::error::FetchResult;
use crate::render::ChartSlot;
use crate::state::Widget;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

/// A single fetch the dashboard can issue
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Request {
    Areas,
    Dashboard,
    Comparisons(String),
    Extremes(String),
    Analysis(Option<String>),
    Priorities(Option<String>),
    Institutions(Option<String>),
    Similar(Option<String>),
}

impl Request {
    /// Fetches needed to show a selection (`None` is the overview)
    pub fn for_selection(area: Option<&str>) -> Vec<Request> {
        let scoped = area.map(str::to_string);
        let mut requests = match area {
            None => vec![Request::Dashboard],
            Some(area) => vec![
                Request::Comparisons(area.to_string()),
                Request::Extremes(area.to_string()),
            ],
        };
        requests.extend([
            Request::Analysis(scoped.clone()),
            Request::Priorities(scoped.clone()),
            Request::Institutions(scoped.clone()),
            Request::Similar(scoped),
        ]);
        requests
    }

    /// Widgets fed by this request's payload
    pub fn widgets(&self) -> &'static [Widget] {
        match self {
            Self::Areas => &[Widget::AreaSelector],
            Self::Dashboard => &[
                Widget::Summary,
                Widget::Chart(ChartSlot::Comparison),
                Widget::Chart(ChartSlot::Dimension),
                Widget::Chart(ChartSlot::Courses),
                Widget::DetailTable,
            ],
            Self::Comparisons(_) => &[Widget::Chart(ChartSlot::Comparison), Widget::DetailTable],
            Self::Extremes(_) => &[Widget::Extremes],
            Self::Analysis(_) => &[Widget::Analysis],
            Self::Priorities(_) => &[Widget::PriorityList, Widget::PriorityTable],
            Self::Institutions(_) => &[Widget::Institutions],
            Self::Similar(_) => &[Widget::Similar],
        }
    }

    /// Message shown in place of the widgets when the fetch fails
    pub fn placeholder(&self) -> &'static str {
        match self {
            Self::Areas => "Erro ao carregar áreas",
            Self::Dashboard => "Erro ao carregar dados do dashboard",
            Self::Comparisons(_) | Self::Extremes(_) => "Erro ao carregar análise específica",
            Self::Analysis(_) => "Erro ao carregar análise abrangente",
            Self::Priorities(_) => "Erro ao carregar prioridades de melhoria",
            Self::Institutions(_) => "Erro ao carregar comparação institucional",
            Self::Similar(_) => "Erro ao carregar instituições similares",
        }
    }
}

/// Decoded payload of a [`Request`]
#[derive(Debug, Clone, PartialEq)]
pub enum Payload {
    Areas(Areas),
    Dashboard(DashboardData),
    Comparisons(LevelComparison),
    Extremes { area: String, data: ExtremesResult },
    Analysis(ComprehensiveAnalysis),
    Priorities(PrioritiesResponse),
    Institutions(InstitutionalComparison),
    Similar(SimilarInstitutions),
}

/// Completion of a spawned fetch
#[derive(Debug)]
pub struct LoadEvent {
    pub generation: u64,
    pub request: Request,
    pub result: FetchResult<Payload>,
}

/// Perform one request
pub async fn fetch(client: &ApiClient, request: &Request) -> FetchResult<Payload> {
    Ok(match request {
        Request::Areas => Payload::Areas(client.areas().await?),
        Request::Dashboard => Payload::Dashboard(client.dashboard_data().await?),
        Request::Comparisons(area) => Payload::Comparisons(client.comparisons(Some(area)).await?),
        Request::Extremes(area) => Payload::Extremes {
            area: area.clone(),
            data: client.extremes(area).await?,
        },
        Request::Analysis(area) => {
            Payload::Analysis(client.comprehensive_analysis(area.as_deref()).await?)
        }
        Request::Priorities(area) => {
            Payload::Priorities(client.improvement_priorities(area.as_deref()).await?)
        }
        Request::Institutions(area) => {
            Payload::Institutions(client.institutional_comparison(area.as_deref()).await?)
        }
        Request::Similar(area) => Payload::Similar(client.similar_institutions(area.as_deref()).await?),
    })
}

/// Spawns fetches and tracks them by generation
pub struct Loader {
    client: ApiClient,
    event_tx: mpsc::UnboundedSender<LoadEvent>,
    in_flight: Vec<(u64, JoinHandle<()>)>,
}

impl Loader {
    /// Create a new loader and the receiver its events arrive on
    pub fn new(client: ApiClient) -> (Self, mpsc::UnboundedReceiver<LoadEvent>) {
        let (tx, rx) = mpsc::unbounded_channel();

        (
            Self {
                client,
                event_tx: tx,
                in_flight: Vec::new(),
            },
            rx,
        )
    }

    /// Spawn a fetch tagged with `generation`
    pub fn spawn(&mut self, generation: u64, request: Request) {
        log::debug!("Spawning {:?} (generation {})", request, generation);

        let client = self.client.clone();
        let event_tx = self.event_tx.clone();

        let handle = tokio::spawn(async move {
            let result = fetch(&client, &request).await;
            // Receiver gone means the app is shutting down
            let _ = event_tx.send(LoadEvent {
                generation,
                request,
                result,
            });
        });

        self.in_flight.retain(|(_, h)| !h.is_finished());
        self.in_flight.push((generation, handle));
    }

    /// Abort every task issued before `generation`; returns how many were still running
    pub fn cancel_stale(&mut self, generation: u64) -> usize {
        let mut aborted = 0;
        self.in_flight.retain(|(issued, handle)| {
            if *issued < generation {
                if !handle.is_finished() {
                    handle.abort();
                    aborted += 1;
                }
                false
            } else {
                true
            }
        });
        if aborted > 0 {
            log::info!("Cancelled {} stale request(s)", aborted);
        }
        aborted
    }

    /// Tasks not yet finished
    pub fn in_flight(&self) -> usize {
        self.in_flight.iter().filter(|(_, h)| !h.is_finished()).count()
    }

    /// Abort everything, used on shutdown
    pub fn abort_all(&mut self) {
        for (_, handle) in self.in_flight.drain(..) {
            handle.abort();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use std::time::Duration;
    use tokio::net::TcpListener;

    /// Loader whose client talks to a server that accepts but never answers
    async fn stalled_loader() -> (Loader, mpsc::UnboundedReceiver<LoadEvent>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            let mut held = Vec::new();
            while let Ok((socket, _)) = listener.accept().await {
                held.push(socket);
            }
        });

        let config = Config {
            base_url: format!("http://{}", addr),
            timeout_secs: 30,
            ..Config::default()
        };
        Loader::new(ApiClient::new(&config).unwrap())
    }

    #[tokio::test]
    async fn test_cancel_stale_aborts_older_generations() {
        let (mut loader, mut rx) = stalled_loader().await;
        loader.spawn(1, Request::Areas);
        loader.spawn(1, Request::Dashboard);
        tokio::time::sleep(Duration::from_millis(50)).await;
        assert_eq!(loader.in_flight(), 2);

        assert_eq!(loader.cancel_stale(2), 2);
        assert_eq!(loader.in_flight(), 0);

        tokio::time::sleep(Duration::from_millis(50)).await;
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test]
    async fn test_cancel_stale_keeps_current_generation() {
        let (mut loader, _rx) = stalled_loader().await;
        loader.spawn(1, Request::Areas);
        loader.spawn(2, Request::Similar(None));

        assert_eq!(loader.cancel_stale(2), 1);
        assert_eq!(loader.in_flight(), 1);

        loader.abort_all();
        assert_eq!(loader.in_flight(), 0);
    }

    #[test]
    fn test_overview_requests() {
        let requests = Request::for_selection(None);
        assert_eq!(requests[0], Request::Dashboard);
        assert!(requests.contains(&Request::Priorities(None)));
        assert!(!requests.iter().any(|r| matches!(r, Request::Extremes(_))));
    }

    #[test]
    fn test_area_requests() {
        let requests = Request::for_selection(Some("DIREITO"));
        assert!(requests.contains(&Request::Comparisons("DIREITO".to_string())));
        assert!(requests.contains(&Request::Extremes("DIREITO".to_string())));
        assert!(requests.contains(&Request::Similar(Some("DIREITO".to_string()))));
        assert!(!requests.contains(&Request::Dashboard));
    }

    #[test]
    fn test_placeholders() {
        assert_eq!(Request::Dashboard.placeholder(), "Erro ao carregar dados do dashboard");
        assert_eq!(
            Request::Extremes("X".to_string()).placeholder(),
            "Erro ao carregar análise específica"
        );
        assert_eq!(Request::Priorities(None).widgets().len(), 2);
    }
}
