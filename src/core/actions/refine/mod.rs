pub mod refinement_scheduler;
