//! Debounce stdin lines
//!
//! Each input line reschedules the printer; a line is only printed once no
//! newer line arrived within the delay, the way search-as-you-type fields
//! wait for typing to pause.

use crate::system_config::{self, MAX_DELAY_MS};
use crate::util;
use anyhow::{Context, Result};
use lull_debounce::{Debouncer, TokioTimers};
use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};
use tokio::sync::Notify;
use tokio::task::LocalSet;
use tracing::{debug, info};

pub async fn run(delay_ms: Option<u64>, flush_on_eof: bool) -> Result<()> {
    let delay_ms = match delay_ms {
        Some(ms) => ms,
        None => system_config::load()?.debounce.delay_ms,
    };
    if delay_ms > MAX_DELAY_MS {
        anyhow::bail!("--delay-ms must be between 0 and {}", MAX_DELAY_MS);
    }

    let delay = Duration::from_millis(delay_ms);
    LocalSet::new()
        .run_until(async {
            let stdin = BufReader::new(tokio::io::stdin());
            let (received, emitted) = debounce_lines(stdin, delay, flush_on_eof).await?;
            info!("Read {} lines, emitted {}", received, emitted);
            Ok::<_, anyhow::Error>(())
        })
        .await
}

/// Print lines of `input` that stay unsuperseded for `delay`
///
/// Returns once input is exhausted and nothing is pending, with the number
/// of lines read and printed. Must run inside a `LocalSet`.
async fn debounce_lines<R>(input: R, delay: Duration, flush_on_eof: bool) -> Result<(usize, usize)>
where
    R: AsyncBufRead + Unpin,
{
    let debouncer = Debouncer::new(TokioTimers::new());
    let emitted = Rc::new(Cell::new(0usize));
    let printed = Rc::new(Notify::new());

    let print = {
        let emitted = Rc::clone(&emitted);
        let printed = Rc::clone(&printed);
        move |line: String| {
            println!("{}", line);
            emitted.set(emitted.get() + 1);
            printed.notify_one();
        }
    };
    let emit = debouncer.debounce(print.clone(), delay);

    debug!("Debouncing stdin with a {} quiet period", util::format_delay(delay));

    let mut lines = input.lines();
    let mut last = None;
    let mut received = 0usize;

    while let Some(line) = lines.next_line().await.context("Failed to read stdin")? {
        received += 1;
        last = Some(line.clone());
        emit.call(line);
    }

    if debouncer.is_pending() {
        match last {
            Some(line) if flush_on_eof => debouncer.flush(print, line),
            _ => {
                // Wake on each print until the last pending line is out
                while debouncer.is_pending() {
                    printed.notified().await;
                }
            }
        }
    }

    Ok((received, emitted.get()))
}
