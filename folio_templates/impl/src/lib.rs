use std::sync::Arc;

use folio_templates_contracts::{Template, TemplateService, BASE_TEMPLATE, TEMPLATES};
use tera::Tera;

#[derive(Debug, Clone)]
pub struct TemplateServiceImpl {
    tera: Arc<Tera>,
}

impl TemplateServiceImpl {
    pub fn new() -> anyhow::Result<Self> {
        let mut tera = Tera::default();

        tera.add_raw_templates(std::iter::once(BASE_TEMPLATE).chain(TEMPLATES.iter().copied()))?;

        Ok(Self { tera: tera.into() })
    }
}

impl TemplateService for TemplateServiceImpl {
    fn render<T: Template>(&self, template: &T) -> anyhow::Result<String> {
        let context = tera::Context::from_serialize(template)?;
        self.tera.render(T::NAME, &context).map_err(Into::into)
    }
}
