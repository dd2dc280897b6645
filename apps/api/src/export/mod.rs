// Export: per-request pipeline, document-kind dispatch, and the HTTP handlers on top.
// Classification, synthesis and rendering all happen inside one request; nothing is kept.

pub mod dispatcher;
pub mod handlers;
pub mod pipeline;
