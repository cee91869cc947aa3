//! Scripted replay of page events against a loaded document
//!
//! Steps are written `scroll:<px>`, `click:<id>` and `wait:<ms>`. Scroll
//! requests issued by behaviors are reported; a back-to-top request is
//! applied immediately so the following steps see offset 0.

use crate::{PageEvent, PageInteraction, StepError};
use sitefx_dom::{Document, ScrollMetrics, ScrollTarget};
use std::time::Duration;

/// One replay step
#[derive(Debug, Clone, PartialEq)]
pub enum Step {
    /// Move the viewport to this offset and fire a scroll event
    Scroll(f64),
    /// Click the element with this id
    Click(String),
    /// Let time pass so timers can fire
    Wait(Duration),
}

impl Step {
    pub fn parse(text: &str) -> Result<Self, StepError> {
        let (kind, arg) = text
            .split_once(':')
            .ok_or_else(|| StepError::Malformed(text.to_string()))?;
        let arg = arg.trim();
        match kind.trim() {
            "scroll" => arg
                .parse::<f64>()
                .map(Step::Scroll)
                .map_err(|source| StepError::InvalidFloat { step: text.to_string(), source }),
            "click" if !arg.is_empty() => Ok(Step::Click(arg.to_string())),
            "wait" => arg
                .parse::<u64>()
                .map(|ms| Step::Wait(Duration::from_millis(ms)))
                .map_err(|source| StepError::InvalidInt { step: text.to_string(), source }),
            _ => Err(StepError::Malformed(text.to_string())),
        }
    }
}

/// Parse `<client_height>x<scroll_height>` into initial metrics
pub fn parse_viewport(text: &str) -> Result<ScrollMetrics, StepError> {
    let (client, scroll) = text
        .split_once('x')
        .ok_or_else(|| StepError::Malformed(text.to_string()))?;
    let parse = |value: &str| {
        value
            .trim()
            .parse::<f64>()
            .map_err(|source| StepError::InvalidFloat { step: text.to_string(), source })
    };
    Ok(ScrollMetrics::new(0.0, parse(scroll)?, parse(client)?))
}

/// Apply one step
pub fn apply(page: &mut PageInteraction, doc: &mut Document, step: &Step) -> Result<(), StepError> {
    match step {
        Step::Scroll(offset) => {
            doc.set_scroll_top(*offset);
            page.dispatch(doc, PageEvent::Scroll);
        }
        Step::Click(id) => {
            let target = doc
                .get_element_by_id(id)
                .ok_or_else(|| StepError::UnknownElement(id.clone()))?;
            let outcome = page.dispatch(doc, PageEvent::Click { target });
            tracing::info!(
                "click #{}: handled by {:?}, default prevented: {}",
                id,
                outcome.handled_by(),
                outcome.is_default_prevented()
            );
            settle_scroll_requests(page, doc);
        }
        Step::Wait(elapsed) => {
            let fired = page.advance(doc, *elapsed);
            tracing::info!("waited {:?}: {} timers fired", elapsed, fired);
        }
    }
    Ok(())
}

/// Apply steps in order, stopping at the first failure
pub fn run(page: &mut PageInteraction, doc: &mut Document, steps: &[Step]) -> Result<(), StepError> {
    for step in steps {
        apply(page, doc, step)?;
    }
    Ok(())
}

fn settle_scroll_requests(page: &mut PageInteraction, doc: &mut Document) {
    for request in doc.take_scroll_requests() {
        match request.target {
            ScrollTarget::Top => {
                tracing::info!("scroll to top ({:?})", request.options.behavior);
                doc.set_scroll_top(0.0);
                page.dispatch(doc, PageEvent::Scroll);
            }
            ScrollTarget::Element(node) => {
                let id = doc.tree().element(node).and_then(|e| e.id.clone()).unwrap_or_default();
                tracing::info!("scroll #{} into view ({:?})", id, request.options.behavior);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_steps() {
        assert_eq!(Step::parse("scroll:120").unwrap(), Step::Scroll(120.0));
        assert_eq!(Step::parse("click:navBtn").unwrap(), Step::Click("navBtn".into()));
        assert_eq!(Step::parse("wait: 1500").unwrap(), Step::Wait(Duration::from_millis(1500)));
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!(Step::parse("scroll"), Err(StepError::Malformed(_))));
        assert!(matches!(Step::parse("click:"), Err(StepError::Malformed(_))));
        assert!(matches!(Step::parse("jump:4"), Err(StepError::Malformed(_))));
        assert!(matches!(Step::parse("scroll:far"), Err(StepError::InvalidFloat { .. })));
        assert!(matches!(Step::parse("wait:-5"), Err(StepError::InvalidInt { .. })));
    }

    #[test]
    fn test_parse_viewport() {
        let metrics = parse_viewport("800x3000").unwrap();
        assert_eq!(metrics.client_height, 800.0);
        assert_eq!(metrics.scroll_height, 3000.0);
        assert_eq!(metrics.scroll_top, 0.0);
        assert!(parse_viewport("800").is_err());
    }
}
