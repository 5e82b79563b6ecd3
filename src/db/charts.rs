use rusqlite::Connection;
use serde::Serialize;

use crate::error::ChartError;

/// One OHLC point as consumed by the candlestick chart.
///
/// `x` is the bar's unix-epoch open time in milliseconds; the frontend feeds
/// it straight into `new Date(x)`.
#[derive(Debug, Clone, Serialize)]
pub struct CandlePoint {
    pub x: i64,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
}

/// The label/value charts sharing the `{labels, data}` response shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartKind {
    Line,
    Bar,
    Pie,
}

impl ChartKind {
    /// Key under which the series is stored in the `chart_series` table.
    pub fn key(self) -> &'static str {
        match self {
            Self::Line => "line",
            Self::Bar => "bar",
            Self::Pie => "pie",
        }
    }
}

/// A label/value series split into the two parallel arrays the frontend
/// plugs into its chart datasets. Equal length is not enforced anywhere.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ChartSeries {
    pub labels: Vec<String>,
    pub data: Vec<f64>,
}

/// Fetch all candle rows in chronological order.
pub fn fetch_candles(conn: &Connection) -> Result<Vec<CandlePoint>, ChartError> {
    let mut stmt = conn.prepare(
        "SELECT t, open, high, low, close
         FROM candles
         ORDER BY t ASC",
    )?;

    let rows: Vec<CandlePoint> = stmt
        .query_map([], |row| {
            Ok(CandlePoint {
                x: row.get(0)?,
                open: row.get(1)?,
                high: row.get(2)?,
                low: row.get(3)?,
                close: row.get(4)?,
            })
        })?
        .collect::<Result<Vec<_>, _>>()?;

    Ok(rows)
}

/// Fetch the label/value series for one chart kind, ordered by position.
pub fn fetch_series(conn: &Connection, kind: ChartKind) -> Result<ChartSeries, ChartError> {
    let mut stmt = conn.prepare(
        "SELECT label, value
         FROM chart_series
         WHERE chart = ?1
         ORDER BY pos ASC",
    )?;

    let mut series = ChartSeries::default();
    let rows = stmt.query_map([kind.key()], |row| {
        Ok((row.get::<_, String>(0)?, row.get::<_, f64>(1)?))
    })?;
    for row in rows {
        let (label, value) = row?;
        series.labels.push(label);
        series.data.push(value);
    }

    Ok(series)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_conn() -> Connection {
        let conn = Connection::open_in_memory().unwrap();
        conn.execute_batch(
            "CREATE TABLE candles (
                 t INTEGER PRIMARY KEY,
                 open REAL NOT NULL,
                 high REAL NOT NULL,
                 low REAL NOT NULL,
                 close REAL NOT NULL
             );
             CREATE TABLE chart_series (
                 chart TEXT NOT NULL,
                 pos INTEGER NOT NULL,
                 label TEXT NOT NULL,
                 value REAL NOT NULL,
                 PRIMARY KEY (chart, pos)
             );",
        )
        .unwrap();
        conn
    }

    #[test]
    fn fetch_candles_returns_chronological_order() {
        let conn = test_conn();

        // Inserted out of order on purpose.
        for (t, o, h, l, c) in [
            (3_000i64, 103.0, 113.0, 93.0, 108.0),
            (1_000, 101.0, 111.0, 91.0, 106.0),
            (2_000, 102.0, 112.0, 92.0, 107.0),
        ] {
            conn.execute(
                "INSERT INTO candles (t, open, high, low, close) VALUES (?1, ?2, ?3, ?4, ?5)",
                (t, o, h, l, c),
            )
            .unwrap();
        }

        let candles = fetch_candles(&conn).unwrap();
        assert_eq!(
            candles.iter().map(|p| p.x).collect::<Vec<_>>(),
            vec![1_000, 2_000, 3_000]
        );
        assert_eq!(candles[0].open, 101.0);
        assert_eq!(candles[2].close, 108.0);
    }

    #[test]
    fn fetch_candles_empty_table_yields_empty_vec() {
        let conn = test_conn();
        assert!(fetch_candles(&conn).unwrap().is_empty());
    }

    #[test]
    fn fetch_series_splits_labels_and_values_by_kind() {
        let conn = test_conn();

        for (chart, pos, label, value) in [
            ("line", 0i64, "Jan", 10.0),
            ("line", 1, "Feb", 20.0),
            ("bar", 0, "Red", 12.0),
        ] {
            conn.execute(
                "INSERT INTO chart_series (chart, pos, label, value) VALUES (?1, ?2, ?3, ?4)",
                (chart, pos, label, value),
            )
            .unwrap();
        }

        let line = fetch_series(&conn, ChartKind::Line).unwrap();
        assert_eq!(line.labels, vec!["Jan", "Feb"]);
        assert_eq!(line.data, vec![10.0, 20.0]);

        let bar = fetch_series(&conn, ChartKind::Bar).unwrap();
        assert_eq!(bar.labels, vec!["Red"]);
        assert_eq!(bar.data, vec![12.0]);

        let pie = fetch_series(&conn, ChartKind::Pie).unwrap();
        assert!(pie.labels.is_empty());
        assert!(pie.data.is_empty());
    }

    #[test]
    fn fetch_series_orders_by_position() {
        let conn = test_conn();

        for (pos, label, value) in [(2i64, "C", 3.0), (0, "A", 1.0), (1, "B", 2.0)] {
            conn.execute(
                "INSERT INTO chart_series (chart, pos, label, value) VALUES ('pie', ?1, ?2, ?3)",
                (pos, label, value),
            )
            .unwrap();
        }

        let pie = fetch_series(&conn, ChartKind::Pie).unwrap();
        assert_eq!(pie.labels, vec!["A", "B", "C"]);
        assert_eq!(pie.data, vec![1.0, 2.0, 3.0]);
    }
}
