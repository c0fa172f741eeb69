//! Repository implementation for communication templates.

use crate::{
    domain::{
        template::{Template, TemplateFields},
        types::TemplateId,
    },
    repository::{
        InMemoryRepository, TemplateReader, TemplateWriter,
        errors::{RepositoryError, RepositoryResult},
    },
};

impl TemplateReader for InMemoryRepository {
    fn get_template_by_id(&self, id: &TemplateId) -> RepositoryResult<Option<Template>> {
        Ok(self
            .state()
            .templates
            .iter()
            .find(|template| &template.id == id)
            .cloned())
    }

    fn list_templates(&self) -> RepositoryResult<Vec<Template>> {
        Ok(self.state().templates.clone())
    }
}

impl TemplateWriter for InMemoryRepository {
    fn create_template(&self, fields: &TemplateFields) -> RepositoryResult<Template> {
        let template = fields.clone().into_template(TemplateId::generate());

        self.state_mut().templates.push(template.clone());

        Ok(template)
    }

    fn update_template(
        &self,
        id: &TemplateId,
        fields: &TemplateFields,
    ) -> RepositoryResult<Template> {
        let mut state = self.state_mut();
        let slot = state
            .templates
            .iter_mut()
            .find(|template| &template.id == id)
            .ok_or(RepositoryError::NotFound)?;

        *slot = fields.clone().into_template(id.clone());

        Ok(slot.clone())
    }

    fn delete_template(&self, id: &TemplateId) -> RepositoryResult<Option<Template>> {
        let mut state = self.state_mut();
        let removed = state
            .templates
            .iter()
            .position(|template| &template.id == id)
            .map(|index| state.templates.remove(index));

        Ok(removed)
    }
}
