use async_trait::async_trait;

use crate::modules::testimonial::application::domain::entities::Testimonial;
use crate::modules::testimonial::application::ports::incoming::use_cases::{
    ListTestimonialsError, ListTestimonialsUseCase,
};
use crate::modules::testimonial::application::ports::outgoing::TestimonialRepository;
use crate::shared::validation::normalize_optional;

pub struct ListTestimonialsService<R>
where
    R: TestimonialRepository,
{
    repository: R,
}

impl<R> ListTestimonialsService<R>
where
    R: TestimonialRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> ListTestimonialsUseCase for ListTestimonialsService<R>
where
    R: TestimonialRepository + Send + Sync,
{
    async fn execute(
        &self,
        approved: Option<bool>,
        search: Option<String>,
    ) -> Result<Vec<Testimonial>, ListTestimonialsError> {
        self.repository
            .list(approved, normalize_optional(search))
            .await
            .map_err(|e| ListTestimonialsError::RepositoryError(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::testimonial::application::domain::entities::NewTestimonial;
    use crate::tests::support::stubs::InMemoryTestimonialRepository;

    #[tokio::test]
    async fn test_filter_by_approval_state() {
        let repo = InMemoryTestimonialRepository::default();
        let approved = repo
            .create(NewTestimonial {
                name: "A".to_string(),
                role_company: String::new(),
                quote: "Q".to_string(),
            })
            .await
            .unwrap();
        repo.create(NewTestimonial {
            name: "P".to_string(),
            role_company: String::new(),
            quote: "Q".to_string(),
        })
        .await
        .unwrap();
        repo.set_approval(&[approved.id], true).await.unwrap();
        let service = ListTestimonialsService::new(repo);

        assert_eq!(service.execute(None, None).await.unwrap().len(), 2);
        let pending = service.execute(Some(false), None).await.unwrap();
        assert_eq!(pending.len(), 1);
        assert_eq!(pending[0].name, "P");
    }

    #[tokio::test]
    async fn test_search_covers_name_role_and_quote() {
        let repo = InMemoryTestimonialRepository::default();
        for (name, role_company, quote) in [
            ("Sam", "CTO, Acme", "Shipped on time"),
            ("Lee", "Freelance", "Great ACME integration"),
            ("Kim", "Globex", "Clean code"),
        ] {
            repo.create(NewTestimonial {
                name: name.to_string(),
                role_company: role_company.to_string(),
                quote: quote.to_string(),
            })
            .await
            .unwrap();
        }
        let service = ListTestimonialsService::new(repo);

        let found = service
            .execute(None, Some(" acme ".to_string()))
            .await
            .unwrap();
        let blank = service.execute(None, Some("  ".to_string())).await.unwrap();

        let names: Vec<_> = found.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, vec!["Lee", "Sam"]);
        assert_eq!(blank.len(), 3);
    }
}
