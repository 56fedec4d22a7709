use std::path::Path;

use rayon::prelude::*;

use crate::{
    catalog::Catalog,
    document::{DOCUMENT_EXT, RenderedDocument, render_document},
    foundation::error::{DeckartError, DeckartResult},
    sink::DocumentSink,
};

/// Options for [`update_catalog`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UpdateOpts {
    /// Directory written into `image` references: `./<image_dir>/<id>.svg`.
    pub image_dir: String,
    /// Render documents on a dedicated rayon pool before writing them.
    pub parallel: bool,
    /// Override rayon worker threads (parallel mode only).
    pub threads: Option<usize>,
}

impl Default for UpdateOpts {
    fn default() -> Self {
        Self {
            image_dir: "cards".to_string(),
            parallel: false,
            threads: None,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct UpdateReport {
    pub rendered: usize,
    pub skipped: usize,
}

/// Relative image reference stored on an entry: `./<image_dir>/<id>.svg`.
///
/// Absolute image dirs are rejected; a reference must resolve next to the deck.
pub fn image_ref(image_dir: &str, id: &str) -> DeckartResult<String> {
    if image_dir.starts_with(['/', '\\']) || Path::new(image_dir).is_absolute() {
        return Err(DeckartError::validation(format!(
            "image dir '{image_dir}' must be relative to the deck"
        )));
    }
    let dir = image_dir.trim_start_matches("./").trim_end_matches('/');
    Ok(if dir.is_empty() || dir == "." {
        format!("./{id}.{DOCUMENT_EXT}")
    } else {
        format!("./{dir}/{id}.{DOCUMENT_EXT}")
    })
}

struct Job {
    index: usize,
    id: String,
    title: String,
    image: String,
}

/// Render every entry with a usable id, hand each document to `sink`, and point the entry's
/// `image` at it.
///
/// Entries are handled in catalog order. Entries without an id are skipped. A sink error stops the
/// batch; documents already written stay written.
#[tracing::instrument(skip_all, fields(entries = catalog.len(), parallel = opts.parallel))]
pub fn update_catalog(
    catalog: &mut Catalog,
    sink: &mut dyn DocumentSink,
    opts: &UpdateOpts,
) -> DeckartResult<UpdateReport> {
    let mut jobs = Vec::with_capacity(catalog.len());
    for (index, entry) in catalog.entries.iter().enumerate() {
        let Some(id) = entry.key() else {
            tracing::debug!(index, "skipping entry without id");
            continue;
        };
        jobs.push(Job {
            index,
            image: image_ref(&opts.image_dir, &id)?,
            title: entry.display_title(),
            id,
        });
    }

    let report = UpdateReport {
        rendered: jobs.len(),
        skipped: catalog.len() - jobs.len(),
    };

    if opts.parallel {
        let pool = build_thread_pool(opts.threads)?;
        let docs: Vec<RenderedDocument> = pool.install(|| {
            jobs.par_iter()
                .map(|job| render_document(&job.id, &job.title))
                .collect()
        });
        for (job, doc) in jobs.iter().zip(&docs) {
            commit(catalog, sink, job, doc)?;
        }
    } else {
        for job in &jobs {
            let doc = render_document(&job.id, &job.title);
            commit(catalog, sink, job, &doc)?;
        }
    }

    tracing::info!(
        rendered = report.rendered,
        skipped = report.skipped,
        "catalog updated"
    );
    Ok(report)
}

fn commit(
    catalog: &mut Catalog,
    sink: &mut dyn DocumentSink,
    job: &Job,
    doc: &RenderedDocument,
) -> DeckartResult<()> {
    sink.write_document(doc)?;
    catalog.entries[job.index].set_image(job.image.as_str());
    Ok(())
}

fn build_thread_pool(threads: Option<usize>) -> DeckartResult<rayon::ThreadPool> {
    if let Some(n) = threads
        && n == 0
    {
        return Err(DeckartError::validation(
            "update threading 'threads' must be >= 1 when set",
        ));
    }

    let mut builder = rayon::ThreadPoolBuilder::new();
    if let Some(n) = threads {
        builder = builder.num_threads(n);
    }
    builder.build().map_err(|e| {
        DeckartError::Other(anyhow::anyhow!("failed to build rayon thread pool: {e}"))
    })
}
