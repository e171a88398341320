use serde::Deserialize;
use serde_json::Value;

/// One ranking serie of the bump chart, the shape the chart collaborator
/// understands. The feed itself hands over an opaque JSON value; pulling
/// the series out of it is the chart's own concern.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct BumpSerie {
    pub id: String,
    pub data: Vec<BumpPoint>,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct BumpPoint {
    pub x: Value,
    pub y: f64,
}

impl BumpPoint {
    pub fn x_label(&self) -> String {
        match &self.x {
            Value::String(text) => text.clone(),
            other => other.to_string(),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum ChartFeedError {
    Parse(String),
}

impl ChartFeedError {
    pub fn message(&self) -> &str {
        match self {
            ChartFeedError::Parse(message) => message,
        }
    }
}

/// Parsed committed payload feeding the chart panel.
///
/// Rebuilt at session start and after every applied commit, never during
/// a render pass, so the chart is stable between commits and switching
/// tabs never re-parses.
pub struct ChartFeed {
    input: Result<Value, ChartFeedError>,
    version: u64,
}

impl ChartFeed {
    pub fn from_committed(text: &str) -> Self {
        Self {
            input: parse_input(text),
            version: 0,
        }
    }

    pub fn rebuild(&mut self, text: &str) {
        self.input = parse_input(text);
        self.version = self.version.wrapping_add(1);
    }

    pub fn input(&self) -> Result<&Value, &ChartFeedError> {
        self.input.as_ref()
    }

    /// Bumps on every rebuild; lets tests pin down that renders and tab
    /// switches leave the feed untouched.
    pub fn version(&self) -> u64 {
        self.version
    }
}

fn parse_input(text: &str) -> Result<Value, ChartFeedError> {
    serde_json::from_str(text).map_err(|error| ChartFeedError::Parse(error.to_string()))
}

pub fn bump_series(input: &Value) -> Result<Vec<BumpSerie>, serde_json::Error> {
    serde_json::from_value(input.clone())
}

#[cfg(test)]
mod tests {
    use super::{bump_series, ChartFeed, ChartFeedError};
    use serde_json::json;

    const PAYLOAD: &str = r#"[{"id": "Serie 1", "data": [{"x": 2000, "y": 3}, {"x": 2001, "y": 1}]}]"#;

    #[test]
    fn feed_input_equals_parsed_committed_text() {
        let feed = ChartFeed::from_committed(PAYLOAD);
        let expected = json!([{"id": "Serie 1", "data": [{"x": 2000, "y": 3}, {"x": 2001, "y": 1}]}]);
        assert_eq!(feed.input().unwrap(), &expected);
    }

    #[test]
    fn invalid_json_surfaces_a_parse_error() {
        let feed = ChartFeed::from_committed("{not valid json");
        assert!(matches!(feed.input(), Err(ChartFeedError::Parse(_))));
    }

    #[test]
    fn rebuild_replaces_input_and_bumps_version() {
        let mut feed = ChartFeed::from_committed(PAYLOAD);
        assert_eq!(feed.version(), 0);
        feed.rebuild("[]");
        assert_eq!(feed.version(), 1);
        assert_eq!(feed.input().unwrap(), &json!([]));
    }

    #[test]
    fn series_extraction_reads_id_and_points() {
        let feed = ChartFeed::from_committed(PAYLOAD);
        let series = bump_series(feed.input().unwrap()).unwrap();
        assert_eq!(series.len(), 1);
        assert_eq!(series[0].id, "Serie 1");
        assert_eq!(series[0].data.len(), 2);
        assert_eq!(series[0].data[1].y, 1.0);
        assert_eq!(series[0].data[0].x_label(), "2000");
    }

    #[test]
    fn wrong_shape_is_the_collaborators_error_not_the_feeds() {
        let feed = ChartFeed::from_committed(r#"{"rows": 3}"#);
        let input = feed.input().expect("valid JSON must reach the chart");
        assert!(bump_series(input).is_err());
    }
}
