use arhivpogodi::{aggregate, extract_month, DEFAULT_TIME_SLOT};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

const PANEL_CLASS: &str = "swiper-slide swiper-autoheight w-auto d-inline-block border-start";

/// A synthetic 31-day month page shaped like the archive's markup.
fn synthetic_month_page() -> String {
    let weathers = ["Ясно", "Облачно, дождь", "Пасмурно, небольшой снег"];
    let winds = ["С", "СВ", "ЮЗ", "штиль"];
    let mut panels = String::new();
    for day in 0..31 {
        let mut cells = vec![String::from("<div></div>"); 12];
        cells[1] = format!(
            "<div><img src=\"/icons/w.svg\" alt=\"{}\"></div>",
            weathers[day % weathers.len()]
        );
        cells[2] = format!("<div><span> {} </span>°C</div>", (day as i32) - 15);
        cells[5] = format!("<div> {} </div>", 740 + day);
        cells[11] = format!("<div> {} </div>", winds[day % winds.len()]);
        let filler = "<div class=\"d-inline-block\"></div>".repeat(6);
        panels.push_str(&format!(
            "<div class=\"{PANEL_CLASS}\">{filler}<div class=\"d-inline-block\">{}</div></div>",
            cells.concat()
        ));
    }
    format!("<html><body><div class=\"swiper\"><div class=\"swiper-wrapper\">{panels}</div></div></body></html>")
}

fn bench_report(c: &mut Criterion) {
    let page = synthetic_month_page();

    c.bench_function("extract_month_31_days", |b| {
        b.iter(|| extract_month(black_box(&page), DEFAULT_TIME_SLOT))
    });

    let extraction = extract_month(&page, DEFAULT_TIME_SLOT);
    c.bench_function("aggregate_31_days", |b| {
        b.iter(|| aggregate(black_box(&extraction.records)))
    });
}

criterion_group!(benches, bench_report);
criterion_main!(benches);
