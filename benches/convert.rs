// benches/convert.rs
use criterion::{criterion_group, criterion_main, Criterion, black_box};

use rinkstat::{
    config::options::OutputFormat,
    convert::{self, Report},
    csv, render,
};

/// Synthetic game: `n` skaters and a goalie per team, mixed value types.
fn sample_game(n: usize) -> String {
    let mut players = Vec::new();
    for team in ["Blue", "Red"] {
        for i in 0..n {
            players.push(format!(
                r#"{{"name":"{team} {i}","team":"{team}","position":"C","goals":{},"assists":"{}","sog":{},"timeOnIce":"{}:{:02}","plusMinus":{}}}"#,
                i % 3, i % 2, i, 10 + i, i % 60, i as i64 - 3
            ));
        }
        players.push(format!(
            r#"{{"name":"{team} G","team":"{team}","position":"G","shotsFaced":30,"saves":27,"goalsAllowed":3,"saveperc":0.9}}"#
        ));
    }
    format!(r#"{{"players":[{}]}}"#, players.join(","))
}

fn bench_convert(c: &mut Criterion) {
    let doc = sample_game(20);

    c.bench_function("convert_text", |b| {
        b.iter(|| {
            let tables = convert::convert_text("bench.json", black_box(&doc)).unwrap_or_default();
            black_box(tables.len())
        })
    });

    let tables = convert::convert_text("bench.json", &doc).unwrap_or_default();
    let report = Report::from_outcomes(vec![(String::from("bench.json"), Ok(tables.clone()))]);

    c.bench_function("csv_tables", |b| {
        b.iter(|| {
            let n: usize = tables
                .iter()
                .filter_map(|t| csv::table_to_string(black_box(t), ',').ok())
                .map(|s| s.len())
                .sum();
            black_box(n)
        })
    });

    c.bench_function("render_html", |b| {
        b.iter(|| {
            let out = render::render(black_box(&report), OutputFormat::Html).unwrap_or_default();
            black_box(out.len())
        })
    });
}

criterion_group!(benches, bench_convert);
criterion_main!(benches);
