//! Fake Star Wars API upstream for integration tests
//!
//! Serves canned responses keyed by resource path (e.g. `starships/?page=1`)
//! under `/api/`, and counts how often each path was requested.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use axum::{
    extract::State,
    http::{header, StatusCode, Uri},
    response::{IntoResponse, Response},
    Router,
};
use parking_lot::Mutex;
use serde_json::{json, Value};
use tokio::net::TcpListener;

use swapi_demo::app::App;
use swapi_demo::config::AppConfig;
use swapi_demo::stats::RunStats;

/// A canned upstream response
#[derive(Debug, Clone)]
pub struct Canned {
    status: StatusCode,
    body: String,
    delay: Option<Duration>,
}

impl Canned {
    pub fn json(body: Value) -> Self {
        Self {
            status: StatusCode::OK,
            body: body.to_string(),
            delay: None,
        }
    }

    pub fn raw(body: &str) -> Self {
        Self {
            status: StatusCode::OK,
            body: body.to_string(),
            delay: None,
        }
    }

    pub fn status(code: u16) -> Self {
        Self {
            status: StatusCode::from_u16(code).expect("valid status code"),
            body: json!({"detail": "Not found"}).to_string(),
            delay: None,
        }
    }

    pub fn delayed(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub fn body_len(&self) -> u64 {
        self.body.len() as u64
    }
}

struct FakeState {
    routes: HashMap<String, Canned>,
    hits: Mutex<HashMap<String, usize>>,
}

/// Running fake upstream bound to a random local port
pub struct FakeUpstream {
    pub base_url: String,
    state: Arc<FakeState>,
}

impl FakeUpstream {
    pub async fn start(routes: HashMap<String, Canned>) -> Self {
        let state = Arc::new(FakeState {
            routes,
            hits: Mutex::new(HashMap::new()),
        });

        let router = Router::new()
            .fallback(serve_canned)
            .with_state(state.clone());

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.ok();
        });

        Self {
            base_url: format!("http://{}/api/", addr),
            state,
        }
    }

    /// Number of requests received for `path`
    pub fn hits(&self, path: &str) -> usize {
        self.state.hits.lock().get(path).copied().unwrap_or(0)
    }

    /// Number of requests received across all paths
    pub fn total_hits(&self) -> usize {
        self.state.hits.lock().values().sum()
    }

    /// Config pointing at this upstream with a short timeout
    pub fn config(&self) -> AppConfig {
        AppConfig::default()
            .with_base_url(self.base_url.clone())
            .with_timeout(Duration::from_millis(2000))
    }

    pub fn app(&self) -> App {
        App::new(self.config()).expect("Failed to build app")
    }

    pub fn app_at(&self, person_index: u64) -> App {
        App::with_stats(self.config(), RunStats::starting_at(person_index))
            .expect("Failed to build app")
    }
}

async fn serve_canned(State(state): State<Arc<FakeState>>, uri: Uri) -> Response {
    let full = uri
        .path_and_query()
        .map(|pq| pq.as_str().to_string())
        .unwrap_or_default();
    let path = full.strip_prefix("/api/").unwrap_or(&full).to_string();

    *state.hits.lock().entry(path.clone()).or_insert(0) += 1;

    let Some(canned) = state.routes.get(&path).cloned() else {
        return (StatusCode::NOT_FOUND, "no such route").into_response();
    };

    if let Some(delay) = canned.delay {
        tokio::time::sleep(delay).await;
    }

    (
        canned.status,
        [(header::CONTENT_TYPE, "application/json")],
        canned.body,
    )
        .into_response()
}

pub fn person(name: &str, films: usize) -> Value {
    json!({
        "name": name,
        "height": "172",
        "mass": "77",
        "birth_year": "19BBY",
        "films": vec!["https://swapi.dev/api/films/1/"; films],
    })
}

pub fn vehicle(name: &str) -> Value {
    json!({
        "name": name,
        "model": "Digger Crawler",
        "manufacturer": "Corellia Mining Corporation",
        "cost_in_credits": "150000",
        "length": "36.8",
        "crew": "46",
        "passengers": "30",
    })
}

pub fn starships_page() -> Value {
    json!({
        "count": 36,
        "results": [
            {"name": "CR90 corvette", "model": "CR90 corvette", "manufacturer": "Corellian Engineering Corporation",
             "cost_in_credits": "3500000", "max_atmosphering_speed": "950", "hyperdrive_rating": "2.0", "pilots": []},
            {"name": "Star Destroyer", "model": "Imperial I-class Star Destroyer", "manufacturer": "Kuat Drive Yards",
             "cost_in_credits": "150000000", "max_atmosphering_speed": "975", "hyperdrive_rating": "2.0", "pilots": []},
            {"name": "Death Star", "model": "DS-1 Orbital Battle Station", "manufacturer": "Imperial Department of Military Research",
             "cost_in_credits": "unknown", "max_atmosphering_speed": "n/a", "hyperdrive_rating": "4.0", "pilots": []},
            {"name": "Millennium Falcon", "model": "YT-1300 light freighter", "manufacturer": "Corellian Engineering Corporation",
             "cost_in_credits": "100000", "max_atmosphering_speed": "1050", "hyperdrive_rating": "0.5",
             "pilots": ["https://swapi.dev/api/people/13/"]}
        ]
    })
}

pub fn planets_page() -> Value {
    json!({
        "count": 60,
        "results": [
            {"name": "Tatooine", "population": "200000", "diameter": "10465", "climate": "arid", "films": []},
            {"name": "Alderaan", "population": "2000000000", "diameter": "12500", "climate": "temperate",
             "films": ["https://swapi.dev/api/films/1/"]},
            {"name": "Yavin IV", "population": "1000", "diameter": "10200", "climate": "temperate, tropical", "films": []},
            {"name": "Hoth", "population": "unknown", "diameter": "7200", "climate": "frozen", "films": []},
            {"name": "Naboo", "population": "4500000000", "diameter": "12120", "climate": "temperate", "films": []},
            {"name": "Coruscant", "population": "1000000000000", "diameter": "unknown", "climate": "temperate", "films": []}
        ]
    })
}

pub fn films_page() -> Value {
    json!({
        "count": 3,
        "results": [
            {"title": "Return of the Jedi", "release_date": "1983-05-25", "director": "Richard Marquand",
             "producer": "Howard G. Kazanjian, George Lucas, Rick McCallum", "characters": ["a", "b"], "planets": ["c"]},
            {"title": "A New Hope", "release_date": "1977-05-25", "director": "George Lucas",
             "producer": "Gary Kurtz, Rick McCallum", "characters": ["a", "b", "c"], "planets": ["d", "e"]},
            {"title": "The Empire Strikes Back", "release_date": "1980-05-21", "director": "Irvin Kershner",
             "producer": "Gary Kurtz, Rick McCallum", "characters": ["a"], "planets": ["b", "c", "d", "e"]}
        ]
    })
}

/// A complete upstream able to serve runs for person indexes 1 through 5
pub fn full_routes() -> HashMap<String, Canned> {
    let mut routes = HashMap::new();
    for (index, name) in ["Luke Skywalker", "C-3PO", "R2-D2", "Darth Vader", "Leia Organa"]
        .iter()
        .enumerate()
    {
        routes.insert(format!("people/{}", index + 1), Canned::json(person(name, 4)));
    }
    routes.insert("vehicles/4".to_string(), Canned::json(vehicle("Sand Crawler")));
    routes.insert("vehicles/5".to_string(), Canned::json(vehicle("T-16 skyhopper")));
    routes.insert("starships/?page=1".to_string(), Canned::json(starships_page()));
    routes.insert("planets/?page=1".to_string(), Canned::json(planets_page()));
    routes.insert("films/".to_string(), Canned::json(films_page()));
    routes
}
