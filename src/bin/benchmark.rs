use std::sync::mpsc::channel;

use anyhow::{Result, bail};
use clap::Parser as ClapParser;
use scoped_thread_pool::Pool;
use thtml::{html, serialize, time, Template, Value};
use thtml::util::getenv_usize;

#[derive(clap::Parser, Debug)]
/// Serialize a big table template repeatedly, from a pool of threads
/// sharing the same template.
struct Args {
    /// Number of table rows
    #[clap(long, default_value = "25000")]
    rows: usize,

    /// How many times to serialize the table
    #[clap(long, default_value = "40")]
    iterations: usize,

    /// Number of worker threads (default: `THTML_BENCH_THREADS` env
    /// var, or 4)
    #[clap(long)]
    threads: Option<usize>,
}

fn table(rows: usize) -> Template {
    let body: Value = (100..100 + rows).map(|i| {
        let state = if (i as f64 * 0.1).sin() > 0.432 { "on" } else { "off" };
        html!("<tr><td>", i, "abc</td><td>", format!("{i} - {state}"), "</td></tr>")
    }).collect();
    html!("<html><head><title>Test page</title></head><body>\
           <p>Hello world!</p><p>Rows: ", rows, "</p><table>", body,
          "</table></body></html>")
}

fn main() -> Result<()> {
    let args = Args::parse();
    let threads = match args.threads {
        Some(n) => n,
        None => getenv_usize("THTML_BENCH_THREADS", 4)?
    };
    if threads == 0 {
        bail!("need at least 1 thread");
    }

    let template = time!("building template"; table(args.rows));
    let expected_len = time!("single serialization"; serialize(&template).len());

    let pool = Pool::new(threads);
    let (tx, rx) = channel();
    time!(format!("{} serializations on {threads} threads", args.iterations);
          pool.scoped(|scope| {
              for _ in 0..args.iterations {
                  let tx = tx.clone();
                  let template = &template;
                  scope.execute(move || {
                      tx.send(serialize(template).len()).expect("receiver is alive");
                  });
              }
          }));
    pool.shutdown();
    drop(tx);

    let lens: Vec<usize> = rx.iter().collect();
    if lens.len() != args.iterations || lens.iter().any(|l| *l != expected_len) {
        bail!("outputs differ: expected {} times {expected_len} bytes, got {lens:?}",
              args.iterations);
    }
    println!("{} serializations of {expected_len} bytes each", lens.len());
    Ok(())
}
