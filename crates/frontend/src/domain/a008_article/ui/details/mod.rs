use contracts::domain::a008_article::aggregate::{split_paragraphs, split_tags, Article, ArticleDto};
use contracts::domain::common::AggregateRoot;
use leptos::prelude::*;
use thaw::*;

use crate::shared::components::{FormDialog, FormField};
use crate::shared::crud::CrudStore;
use crate::shared::form_utils::{opt_text, show_opt};

/// Lowercase, digits and hyphens, as the path rule expects
pub fn slugify(title: &str) -> String {
    let mut slug = String::new();
    for c in title.trim().to_lowercase().chars() {
        let c = match c {
            'á' | 'à' | 'â' | 'ã' | 'ä' => 'a',
            'é' | 'è' | 'ê' | 'ë' => 'e',
            'í' | 'ì' | 'î' | 'ï' => 'i',
            'ó' | 'ò' | 'ô' | 'õ' | 'ö' => 'o',
            'ú' | 'ù' | 'û' | 'ü' => 'u',
            'ç' => 'c',
            other => other,
        };
        if c.is_ascii_lowercase() || c.is_ascii_digit() {
            slug.push(c);
        } else if !slug.is_empty() && !slug.ends_with('-') {
            slug.push('-');
        }
    }
    slug.trim_end_matches('-').to_string()
}

#[component]
pub fn ArticleDetails(store: CrudStore<Article>) -> impl IntoView {
    let editing = store.editing_record();
    let title_text = match &editing {
        Some(a) => format!("Editar artigo: {}", a.title),
        None => "Novo artigo".to_string(),
    };
    let dto = editing.map(|a| a.to_dto()).unwrap_or_default();

    let title = RwSignal::new(dto.title);
    let path = RwSignal::new(dto.path);
    let author = RwSignal::new(dto.author);
    let description = RwSignal::new(dto.description);
    let paragraphs = RwSignal::new(dto.paragraphs.join("\n\n"));
    let image = RwSignal::new(show_opt(&dto.image));
    let caption = RwSignal::new(show_opt(&dto.caption));
    let tags = RwSignal::new(dto.tags.join(", "));
    let publication_date = RwSignal::new(show_opt(&dto.publication_date));
    let enabled = RwSignal::new(dto.enabled);
    let is_draft = RwSignal::new(dto.is_draft);

    let on_submit = Callback::new(move |_| {
        let path_value = path.get_untracked();
        store.save(ArticleDto {
            title: title.get_untracked(),
            path: if path_value.trim().is_empty() {
                slugify(&title.get_untracked())
            } else {
                path_value
            },
            author: author.get_untracked(),
            description: description.get_untracked(),
            paragraphs: split_paragraphs(&paragraphs.get_untracked()),
            image: opt_text(&image.get_untracked()),
            caption: opt_text(&caption.get_untracked()),
            tags: split_tags(&tags.get_untracked()),
            publication_date: opt_text(&publication_date.get_untracked()),
            enabled: enabled.get_untracked(),
            is_draft: is_draft.get_untracked(),
        })
    });

    let dialog = store.dialog;

    view! {
        <FormDialog
            title=title_text
            dialog=dialog
            on_submit=on_submit
            on_cancel=Callback::new(move |_| store.close_dialog())
        >
            <FormField label="Título" field="title" dialog=dialog>
                <Input value=title />
            </FormField>
            <div class="form__row">
                <FormField label="Caminho" field="path" dialog=dialog>
                    <Input value=path placeholder="gerado a partir do título" />
                </FormField>
                <FormField label="Autor" field="author" dialog=dialog>
                    <Input value=author />
                </FormField>
            </div>
            <FormField label="Descrição" field="description" dialog=dialog>
                <Textarea value=description />
            </FormField>
            <FormField label="Parágrafos (separados por uma linha em branco)" field="paragraphs" dialog=dialog>
                <Textarea value=paragraphs />
            </FormField>
            <div class="form__row">
                <FormField label="Imagem (URL)" field="image" dialog=dialog>
                    <Input value=image />
                </FormField>
                <FormField label="Legenda" field="caption" dialog=dialog>
                    <Input value=caption />
                </FormField>
            </div>
            <div class="form__row">
                <FormField label="Tags (separadas por vírgula)" field="tags" dialog=dialog>
                    <Input value=tags />
                </FormField>
                <FormField label="Data de publicação" field="publicationDate" dialog=dialog>
                    <Input value=publication_date input_type=InputType::Date />
                </FormField>
            </div>
            <div class="form__row">
                <Checkbox checked=enabled label="Ativo" />
                <Checkbox checked=is_draft label="Rascunho" />
            </div>
        </FormDialog>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a008_article::aggregate::is_valid_path;

    #[test]
    fn test_slugify() {
        assert_eq!(slugify("Roteiros em Angra dos Reis"), "roteiros-em-angra-dos-reis");
        assert_eq!(slugify("  Navegação & Segurança 2024! "), "navegacao-seguranca-2024");
        assert!(is_valid_path(&slugify("Pôr do sol em Búzios")));
        assert_eq!(slugify("!!!"), "");
    }
}
