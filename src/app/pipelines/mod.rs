pub mod todo_pipeline;
