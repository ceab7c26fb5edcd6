use std::sync::Arc;

use crate::modules::email::application::ports::outgoing::SubmissionNotifier;
use crate::modules::testimonial::application::ports::incoming::use_cases::{
    CountPendingTestimonialsUseCase, DeleteTestimonialUseCase, ListApprovedTestimonialsUseCase,
    ListTestimonialsUseCase, SetTestimonialApprovalUseCase, SubmitTestimonialUseCase,
};
use crate::modules::testimonial::application::ports::outgoing::TestimonialRepository;
use crate::modules::testimonial::application::services::{
    CountPendingTestimonialsService, DeleteTestimonialService, ListApprovedTestimonialsService,
    ListTestimonialsService, SetTestimonialApprovalService, SubmitTestimonialService,
};
use crate::shared::config::SubmissionLimits;

#[derive(Clone)]
pub struct TestimonialUseCases {
    pub submit: Arc<dyn SubmitTestimonialUseCase + Send + Sync>,
    pub list_approved: Arc<dyn ListApprovedTestimonialsUseCase + Send + Sync>,
    pub list: Arc<dyn ListTestimonialsUseCase + Send + Sync>,
    pub set_approval: Arc<dyn SetTestimonialApprovalUseCase + Send + Sync>,
    pub count_pending: Arc<dyn CountPendingTestimonialsUseCase + Send + Sync>,
    pub delete: Arc<dyn DeleteTestimonialUseCase + Send + Sync>,
}

impl TestimonialUseCases {
    pub fn new<R>(
        repository: R,
        notifier: Arc<dyn SubmissionNotifier + Send + Sync>,
        limits: SubmissionLimits,
    ) -> Self
    where
        R: TestimonialRepository + Clone + 'static,
    {
        Self {
            submit: Arc::new(SubmitTestimonialService::new(
                repository.clone(),
                notifier,
                limits,
            )),
            list_approved: Arc::new(ListApprovedTestimonialsService::new(repository.clone())),
            list: Arc::new(ListTestimonialsService::new(repository.clone())),
            set_approval: Arc::new(SetTestimonialApprovalService::new(repository.clone())),
            count_pending: Arc::new(CountPendingTestimonialsService::new(repository.clone())),
            delete: Arc::new(DeleteTestimonialService::new(repository)),
        }
    }
}
