//! Shared test fixtures for the Brickset SDK integration tests.
//!
//! Provides `MockServer::start()`, which serves a small in-memory Brickset
//! API on a random local port and counts requests per endpoint. Like the
//! real ASMX service, every endpoint requires all of its parameters and
//! answers a missing one with a 500 and an exception message.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
    Router,
};
use brickset_sdk::Brickset;

pub const API_KEY: &str = "test-key";
pub const USERNAME: &str = "alice";
pub const PASSWORD: &str = "hunter2";
pub const USER_HASH: &str = "hash-alice";

/// Set that exists in the mock catalog and has related data.
pub const FALCON_ID: i64 = 6905;
pub const MONORAIL_ID: i64 = 7000;

type Hits = Arc<Mutex<HashMap<String, usize>>>;

pub struct MockServer {
    pub base_url: String,
    hits: Hits,
}

impl MockServer {
    /// Start the mock server on a random port in a background thread.
    pub fn start() -> Self {
        let hits: Hits = Arc::new(Mutex::new(HashMap::new()));
        let app = Router::new()
            .route("/api/v2.asmx/:endpoint", get(handle))
            .with_state(hits.clone());

        let std_listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = std_listener.local_addr().unwrap();
        std_listener.set_nonblocking(true).unwrap();

        std::thread::spawn(move || {
            let rt = tokio::runtime::Builder::new_current_thread()
                .enable_all()
                .build()
                .unwrap();
            rt.block_on(async {
                let listener = tokio::net::TcpListener::from_std(std_listener).unwrap();
                axum::serve(listener, app).await
            })
            .unwrap();
        });

        Self {
            base_url: format!("http://{addr}/api/v2.asmx"),
            hits,
        }
    }

    /// Number of requests received for `endpoint`.
    pub fn hits(&self, endpoint: &str) -> usize {
        self.hits.lock().unwrap().get(endpoint).copied().unwrap_or(0)
    }

    pub fn total_hits(&self) -> usize {
        self.hits.lock().unwrap().values().sum()
    }

    /// A client pointed at this server with the valid key, built without the
    /// key check so hit counts start at zero.
    pub fn client(&self) -> Brickset {
        self.client_with_key(API_KEY)
    }

    pub fn client_with_key(&self, key: &str) -> Brickset {
        Brickset::builder()
            .api_key(key)
            .base_url(&self.base_url)
            .verify_key(false)
            .build()
            .unwrap()
    }
}

// ---------------------------------------------------------------------------
// Handler
// ---------------------------------------------------------------------------

async fn handle(
    State(hits): State<Hits>,
    Path(endpoint): Path<String>,
    Query(q): Query<HashMap<String, String>>,
) -> (StatusCode, String) {
    *hits.lock().unwrap().entry(endpoint.clone()).or_insert(0) += 1;

    let required: &[&str] = match endpoint.as_str() {
        "checkKey" => &["apiKey"],
        "login" => &["apiKey", "username", "password"],
        "getSets" => &[
            "apiKey", "userHash", "query", "theme", "subtheme", "setNumber", "year", "owned",
            "wanted", "orderBy", "pageSize", "pageNumber", "userName",
        ],
        "getSet" => &["apiKey", "userHash", "SetID"],
        "getRecentlyUpdatedSets" => &["apiKey", "minutesAgo"],
        "getAdditionalImages" | "getReviews" | "getInstructions" => &["apiKey", "setID"],
        "unavailable" => {
            return (StatusCode::SERVICE_UNAVAILABLE, "Service Unavailable\r\n".to_string())
        }
        _ => return (StatusCode::NOT_FOUND, "Unknown web method.".to_string()),
    };

    if let Some(missing) = required.iter().find(|p| !q.contains_key(**p)) {
        return server_error(&format!("Missing parameter: {missing}."));
    }

    if endpoint == "checkKey" {
        let answer = if q["apiKey"] == API_KEY { "OK" } else { "INVALID" };
        return ok(string_doc(answer));
    }
    if q["apiKey"] != API_KEY {
        return server_error("Invalid API key.");
    }

    match endpoint.as_str() {
        "login" => {
            let answer = if q["username"] == USERNAME && q["password"] == PASSWORD {
                USER_HASH
            } else {
                "INVALID"
            };
            ok(string_doc(answer))
        }
        "getSets" => {
            let owned_only = q["owned"] == "1";
            if owned_only && q["userHash"] != USER_HASH {
                return server_error("owned filter requires userHash.");
            }
            let page_size: usize = q["pageSize"].parse().unwrap_or(20);
            let sets: Vec<String> = catalog()
                .into_iter()
                .filter(|s| q["theme"].is_empty() || s.theme == q["theme"])
                .filter(|s| q["query"].is_empty() || s.name.contains(q["query"].as_str()))
                .filter(|s| q["setNumber"].is_empty() || s.number == q["setNumber"])
                .filter(|s| q["year"].is_empty() || s.year == q["year"])
                .filter(|s| !owned_only || s.id == FALCON_ID)
                .take(page_size)
                .map(|s| s.to_xml(&q["userHash"]))
                .collect();
            ok(array_doc("ArrayOfSets", &sets))
        }
        "getSet" => {
            let sets: Vec<String> = catalog()
                .into_iter()
                .filter(|s| s.id.to_string() == q["SetID"])
                .map(|s| s.to_xml(&q["userHash"]))
                .collect();
            ok(array_doc("ArrayOfSets", &sets))
        }
        "getRecentlyUpdatedSets" => {
            let minutes: i64 = q["minutesAgo"].parse().unwrap_or(0);
            let sets: Vec<String> = catalog()
                .into_iter()
                .filter(|s| s.updated_minutes_ago <= minutes)
                .map(|s| s.to_xml(""))
                .collect();
            ok(array_doc("ArrayOfSets", &sets))
        }
        "getAdditionalImages" => {
            let items = if q["setID"] == FALCON_ID.to_string() {
                vec![
                    image_xml("https://images.brickset.com/sets/AdditionalImages/10179-1/10179_alt1.jpg"),
                    image_xml("https://images.brickset.com/sets/AdditionalImages/10179-1/10179_alt2.jpg"),
                ]
            } else {
                Vec::new()
            };
            ok(array_doc("ArrayOfAdditionalImages", &items))
        }
        "getReviews" => {
            let items = if q["setID"] == FALCON_ID.to_string() {
                vec![review_xml()]
            } else {
                Vec::new()
            };
            ok(array_doc("ArrayOfReviews", &items))
        }
        "getInstructions" => {
            let items = if q["setID"] == FALCON_ID.to_string() {
                vec![
                    "<instructions><URL>https://cache.lego.com/bigdownloads/buildinginstructions/4520720.pdf</URL><description>BI 10179 1/2</description></instructions>".to_string(),
                    "<instructions><URL>https://cache.lego.com/bigdownloads/buildinginstructions/4520721.pdf</URL><description>BI 10179 2/2</description></instructions>".to_string(),
                ]
            } else {
                Vec::new()
            };
            ok(array_doc("ArrayOfInstructions", &items))
        }
        _ => unreachable!(),
    }
}

fn ok(body: String) -> (StatusCode, String) {
    (StatusCode::OK, body)
}

fn server_error(message: &str) -> (StatusCode, String) {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        format!(
            "System.InvalidOperationException: {message}\r\n   at System.Web.Services.Protocols.ValueCollectionParameterReader.Read(NameValueCollection collection)\r\n"
        ),
    )
}

fn string_doc(text: &str) -> String {
    format!(
        r#"<?xml version="1.0" encoding="utf-8"?>
<string xmlns="https://brickset.com/api/">{text}</string>"#
    )
}

fn array_doc(root: &str, items: &[String]) -> String {
    format!(
        r#"<?xml version="1.0" encoding="utf-8"?>
<{root} xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance" xmlns:xsd="http://www.w3.org/2001/XMLSchema" xmlns="https://brickset.com/api/">
{}
</{root}>"#,
        items.join("\n")
    )
}

fn image_xml(url: &str) -> String {
    format!(
        "<additionalImages><thumbnailURL>{url}?thumb</thumbnailURL><largeThumbnailURL>{url}?large</largeThumbnailURL><imageURL>{url}</imageURL></additionalImages>"
    )
}

fn review_xml() -> String {
    r#"<reviews>
    <author>Huw</author>
    <datePosted>2008-01-13T14:22:10.5</datePosted>
    <overallRating>5</overallRating>
    <parts>5</parts>
    <buildingExperience>4</buildingExperience>
    <playability>2</playability>
    <valueForMoney>4</valueForMoney>
    <title>The ultimate Falcon</title>
    <review>&lt;p&gt;Huge, heavy and worth it.&lt;/p&gt;</review>
    <HTML>true</HTML>
  </reviews>"#
        .to_string()
}

// ---------------------------------------------------------------------------
// Catalog
// ---------------------------------------------------------------------------

struct MockSet {
    id: i64,
    number: &'static str,
    name: &'static str,
    year: &'static str,
    theme: &'static str,
    pieces: &'static str,
    released: &'static str,
    rating: &'static str,
    updated_minutes_ago: i64,
}

fn catalog() -> Vec<MockSet> {
    vec![
        MockSet {
            id: FALCON_ID,
            number: "10179",
            name: "Ultimate Collector's Millennium Falcon",
            year: "2007",
            theme: "Star Wars",
            pieces: "5195",
            released: "true",
            rating: "4.6",
            updated_minutes_ago: 30,
        },
        MockSet {
            id: MONORAIL_ID,
            number: "6990",
            name: "Monorail Transport System",
            year: "1987",
            theme: "Space",
            pieces: "",
            released: "1",
            rating: "not rated",
            updated_minutes_ago: 600,
        },
    ]
}

impl MockSet {
    fn to_xml(&self, user_hash: &str) -> String {
        let owned = if user_hash == USER_HASH && self.id == FALCON_ID {
            "true"
        } else {
            "false"
        };
        format!(
            r#"<sets>
    <setID>{id}</setID>
    <number>{number}</number>
    <numberVariant>1</numberVariant>
    <name>{name}</name>
    <year>{year}</year>
    <theme>{theme}</theme>
    <themeGroup>Licensed</themeGroup>
    <subtheme />
    <pieces>{pieces}</pieces>
    <minifigs>5</minifigs>
    <image>true</image>
    <imageFilename>{number}-1</imageFilename>
    <thumbnailURL>https://images.brickset.com/sets/thumbs/tn_{number}-1_jpg.jpg</thumbnailURL>
    <largeThumbnailURL>https://images.brickset.com/sets/small/{number}-1.jpg</largeThumbnailURL>
    <imageURL>https://images.brickset.com/sets/images/{number}-1.jpg</imageURL>
    <bricksetURL>https://brickset.com/sets/{number}-1</bricksetURL>
    <released>{released}</released>
    <owned>{owned}</owned>
    <wanted>false</wanted>
    <qtyOwned>0</qtyOwned>
    <userNotes />
    <ACMDataCount>0</ACMDataCount>
    <ownedByTotal>4120</ownedByTotal>
    <wantedByTotal>3876</wantedByTotal>
    <UKRetailPrice>342.49</UKRetailPrice>
    <USRetailPrice>499.99</USRetailPrice>
    <CARetailPrice />
    <EURetailPrice />
    <USDateAddedToSAH>2007-10-01T00:00:00</USDateAddedToSAH>
    <USDateRemovedFromSAH>sometime</USDateRemovedFromSAH>
    <rating>{rating}</rating>
    <reviewCount>1</reviewCount>
    <packagingType>Box</packagingType>
    <availability>Retail - limited</availability>
    <instructionsCount>2</instructionsCount>
    <additionalImageCount>2</additionalImageCount>
    <ageMin>16</ageMin>
    <ageMax />
    <category>Normal</category>
    <lastUpdated>2016-03-08T11:26:57.197</lastUpdated>
  </sets>"#,
            id = self.id,
            number = self.number,
            name = self.name.replace('\'', "&apos;"),
            year = self.year,
            theme = self.theme,
            pieces = self.pieces,
            released = self.released,
            owned = owned,
            rating = self.rating,
        )
    }
}
