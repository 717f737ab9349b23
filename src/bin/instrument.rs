use std::time::Instant;
use templater::fixture::generate_pages;
use templater::{Render, Templater, TemplaterConfig};

fn run_case(pages: &[String], min_block_size: usize) {
    templater::instrumentation::reset_counters();
    let config = TemplaterConfig {
        min_block_size,
        ..TemplaterConfig::default()
    };
    let mut t = Templater::new(config);

    let t0 = Instant::now();
    for page in pages {
        if let Err(e) = t.learn(page) {
            eprintln!("learn failed: {e}");
            return;
        }
    }
    let dur = t0.elapsed();

    let c = templater::instrumentation::counters_snapshot();
    let (segments, literal_chars) = t
        .template()
        .map(|tpl| (tpl.len(), tpl.literals().map(|l| l.chars().count()).sum::<usize>()))
        .unwrap_or((0, 0));
    println!(
        "min_block_size={} learn_time={:?} segments={} literal_chars={} shift_passes={} diagonals={} compared={} short_circuits={} regions={} wildcards={}",
        min_block_size,
        dur,
        segments,
        literal_chars,
        c.shift_passes,
        c.diagonals,
        c.elements_compared,
        c.short_circuits,
        c.regions_aligned,
        c.wildcards_emitted
    );
    if let Some(tpl) = t.template() {
        println!("  {:?}", tpl.render_with_static("|||"));
    }
}

fn main() {
    let pages = generate_pages(42, 8, 12);
    for min_block_size in [1usize, 2, 4, 8, 16] {
        run_case(&pages, min_block_size);
    }
}
