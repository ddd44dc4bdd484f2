//! Parts gallery: category filter plus a keyboard-navigable lightbox.

use web_sys::KeyboardEvent;
use yew::prelude::*;

use crate::components::modal::use_document_keydown;
use crate::state::{use_ui, ModalId, UiAction};

/// Part families shown in the gallery.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum PartCategory {
    Arm,
    Joint,
    Mount,
}

impl PartCategory {
    pub fn label(self) -> &'static str {
        match self {
            PartCategory::Arm => "アーム",
            PartCategory::Joint => "関節ユニット",
            PartCategory::Mount => "取付ベース",
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum GalleryFilter {
    All,
    Category(PartCategory),
}

impl GalleryFilter {
    pub const ALL_FILTERS: [GalleryFilter; 4] = [
        GalleryFilter::All,
        GalleryFilter::Category(PartCategory::Arm),
        GalleryFilter::Category(PartCategory::Joint),
        GalleryFilter::Category(PartCategory::Mount),
    ];

    pub fn label(self) -> &'static str {
        match self {
            GalleryFilter::All => "すべて",
            GalleryFilter::Category(category) => category.label(),
        }
    }

    pub fn matches(self, category: PartCategory) -> bool {
        match self {
            GalleryFilter::All => true,
            GalleryFilter::Category(wanted) => wanted == category,
        }
    }
}

pub struct GalleryItem {
    pub image: &'static str,
    pub label: &'static str,
    pub category: PartCategory,
}

pub fn gallery_items() -> &'static [GalleryItem] {
    &[
        GalleryItem {
            image: "/assets/gallery/arm-standard.jpg",
            label: "標準アーム 1,000mm",
            category: PartCategory::Arm,
        },
        GalleryItem {
            image: "/assets/gallery/arm-long.jpg",
            label: "ロングアーム 1,500mm",
            category: PartCategory::Arm,
        },
        GalleryItem {
            image: "/assets/gallery/arm-duct.jpg",
            label: "ダクト一体型アーム",
            category: PartCategory::Arm,
        },
        GalleryItem {
            image: "/assets/gallery/joint-friction.jpg",
            label: "摩擦調整式関節",
            category: PartCategory::Joint,
        },
        GalleryItem {
            image: "/assets/gallery/joint-spring.jpg",
            label: "バネバランス関節",
            category: PartCategory::Joint,
        },
        GalleryItem {
            image: "/assets/gallery/mount-wall.jpg",
            label: "壁面取付ベース",
            category: PartCategory::Mount,
        },
        GalleryItem {
            image: "/assets/gallery/mount-ceiling.jpg",
            label: "天吊りベース",
            category: PartCategory::Mount,
        },
        GalleryItem {
            image: "/assets/gallery/mount-bench.jpg",
            label: "卓上クランプベース",
            category: PartCategory::Mount,
        },
    ]
}

/// Indices of the items the filter keeps visible, in gallery order. This is
/// the sequence the lightbox navigates.
pub fn visible_indices(items: &[GalleryItem], filter: GalleryFilter) -> Vec<usize> {
    items
        .iter()
        .enumerate()
        .filter(|(_, item)| filter.matches(item.category))
        .map(|(i, _)| i)
        .collect()
}

/// One wrapping step through a visible sequence of `len` items. An empty
/// sequence has nowhere to go, so the step is a no-op.
pub fn step_index(current: usize, len: usize, delta: isize) -> Option<usize> {
    if len == 0 {
        return None;
    }
    Some((current as isize + delta).rem_euclid(len as isize) as usize)
}

#[function_component(Gallery)]
pub fn gallery() -> Html {
    let ui = use_ui();
    let filter = use_state(|| GalleryFilter::All);
    // Position within the visible sequence; `Some` means the lightbox is up.
    let lightbox = use_state(|| None::<usize>);

    let items = gallery_items();
    let visible = visible_indices(items, *filter);

    let close_lightbox = {
        let lightbox = lightbox.clone();
        let ui = ui.clone();
        Callback::from(move |_: MouseEvent| {
            lightbox.set(None);
            ui.dispatch(UiAction::Close(ModalId::Lightbox));
        })
    };

    // Keyboard navigation only while the lightbox is active.
    {
        let lightbox_handle = lightbox.clone();
        let ui = ui.clone();
        let visible_len = visible.len();
        let position = *lightbox;
        use_document_keydown((position, visible_len), move |event: KeyboardEvent| {
            let Some(current) = position else { return };
            match event.key().as_str() {
                "Escape" => {
                    lightbox_handle.set(None);
                    ui.dispatch(UiAction::Close(ModalId::Lightbox));
                }
                "ArrowLeft" => {
                    if let Some(previous) = step_index(current, visible_len, -1) {
                        lightbox_handle.set(Some(previous));
                    }
                }
                "ArrowRight" => {
                    if let Some(next) = step_index(current, visible_len, 1) {
                        lightbox_handle.set(Some(next));
                    }
                }
                _ => {}
            }
        });
    }

    // A filter change while the lightbox is open keeps the captured
    // position; display clamps to the shrunken sequence and the next
    // navigation step re-normalises it.
    let current_item = (*lightbox)
        .and_then(|position| visible.get(position).or_else(|| visible.last()))
        .map(|index| &items[*index]);

    html! {
        <section id="gallery" class="gallery" data-animate="">
            <h2 class="section-title">{"パーツギャラリー"}</h2>
            <div class="gallery__filters">
                { for GalleryFilter::ALL_FILTERS.iter().map(|option| {
                    let option = *option;
                    let filter = filter.clone();
                    let active = *filter == option;
                    html! {
                        <button
                            class={classes!("gallery-filter", active.then_some("active"))}
                            onclick={Callback::from(move |_: MouseEvent| filter.set(option))}
                        >
                            { option.label() }
                        </button>
                    }
                }) }
            </div>
            <div class="gallery__grid">
                { for items.iter().enumerate().map(|(index, item)| {
                    let hidden = !filter.matches(item.category);
                    let position = visible.iter().position(|i| *i == index);
                    let lightbox = lightbox.clone();
                    let ui = ui.clone();
                    let onclick = Callback::from(move |_: MouseEvent| {
                        // Capture the index within the current visible
                        // sequence, not the absolute one.
                        if let Some(position) = position {
                            lightbox.set(Some(position));
                            ui.dispatch(UiAction::Open(ModalId::Lightbox));
                        }
                    });
                    html! {
                        <button
                            class={classes!("gallery-item", hidden.then_some("hidden"))}
                            {onclick}
                        >
                            <img src={item.image} loading="lazy" alt={item.label} />
                            <span class="gallery-item__label">{ item.label }</span>
                        </button>
                    }
                }) }
            </div>
            if (*lightbox).is_some() {
                <div id="galleryLightbox" class="lightbox active" role="dialog" aria-modal="true">
                    <div class="lightbox__overlay" data-close-lightbox="" onclick={close_lightbox.clone()}></div>
                    <div class="lightbox__body">
                        <button
                            class="lightbox__close"
                            data-close-lightbox=""
                            aria-label="閉じる"
                            onclick={close_lightbox}
                        >
                            {"×"}
                        </button>
                        <button
                            id="lightboxPrev"
                            class="lightbox__nav lightbox__nav--prev"
                            aria-label="前の画像"
                            onclick={{
                                let lightbox = lightbox.clone();
                                let len = visible.len();
                                Callback::from(move |_: MouseEvent| {
                                    if let Some(current) = *lightbox {
                                        if let Some(previous) = step_index(current, len, -1) {
                                            lightbox.set(Some(previous));
                                        }
                                    }
                                })
                            }}
                        >
                            {"‹"}
                        </button>
                        if let Some(item) = current_item {
                            <figure>
                                <img id="lightboxImg" src={item.image} alt={item.label} />
                                <figcaption id="lightboxCaption">{ item.label }</figcaption>
                            </figure>
                        }
                        <button
                            id="lightboxNext"
                            class="lightbox__nav lightbox__nav--next"
                            aria-label="次の画像"
                            onclick={{
                                let lightbox = lightbox.clone();
                                let len = visible.len();
                                Callback::from(move |_: MouseEvent| {
                                    if let Some(current) = *lightbox {
                                        if let Some(next) = step_index(current, len, 1) {
                                            lightbox.set(Some(next));
                                        }
                                    }
                                })
                            }}
                        >
                            {"›"}
                        </button>
                    </div>
                </div>
            }
            <style>
                {r#"
                .gallery {
                    max-width: 1080px;
                    margin: 0 auto;
                    padding: 4rem 2rem;
                }

                .gallery__filters {
                    display: flex;
                    flex-wrap: wrap;
                    gap: 0.75rem;
                    margin-bottom: 2rem;
                }

                .gallery-filter {
                    padding: 0.5rem 1.25rem;
                    border: 1px solid #ccc;
                    border-radius: 999px;
                    background: #fff;
                    color: #555;
                    cursor: pointer;
                    transition: all 0.2s ease;
                }

                .gallery-filter:hover {
                    border-color: #8b2335;
                    color: #8b2335;
                }

                .gallery-filter.active {
                    background: #8b2335;
                    border-color: #8b2335;
                    color: #fff;
                }

                .gallery__grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fill, minmax(220px, 1fr));
                    gap: 1rem;
                }

                .gallery-item {
                    position: relative;
                    border: none;
                    border-radius: 8px;
                    overflow: hidden;
                    padding: 0;
                    cursor: zoom-in;
                    background: #f2f2f2;
                }

                .gallery-item.hidden {
                    display: none;
                }

                .gallery-item img {
                    width: 100%;
                    aspect-ratio: 4 / 3;
                    object-fit: cover;
                    display: block;
                    transition: transform 0.3s ease;
                }

                .gallery-item:hover img {
                    transform: scale(1.04);
                }

                .gallery-item__label {
                    position: absolute;
                    left: 0;
                    right: 0;
                    bottom: 0;
                    padding: 0.5rem 0.75rem;
                    background: rgba(0, 0, 0, 0.55);
                    color: #fff;
                    font-size: 0.85rem;
                    text-align: left;
                }

                .lightbox {
                    position: fixed;
                    inset: 0;
                    z-index: 1100;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                }

                .lightbox__overlay {
                    position: absolute;
                    inset: 0;
                    background: rgba(0, 0, 0, 0.85);
                }

                .lightbox__body {
                    position: relative;
                    display: flex;
                    align-items: center;
                    gap: 1rem;
                    max-width: min(90vw, 960px);
                }

                .lightbox__body figure {
                    margin: 0;
                }

                .lightbox__body img {
                    max-width: 80vw;
                    max-height: 80vh;
                    border-radius: 8px;
                }

                .lightbox__body figcaption {
                    color: #ddd;
                    text-align: center;
                    padding-top: 0.75rem;
                }

                .lightbox__close {
                    position: absolute;
                    top: -2.5rem;
                    right: 0;
                    border: none;
                    background: none;
                    color: #fff;
                    font-size: 1.8rem;
                    cursor: pointer;
                }

                .lightbox__nav {
                    border: none;
                    background: rgba(255, 255, 255, 0.12);
                    color: #fff;
                    width: 48px;
                    height: 48px;
                    border-radius: 50%;
                    font-size: 1.6rem;
                    cursor: pointer;
                    flex-shrink: 0;
                }

                .lightbox__nav:hover {
                    background: rgba(255, 255, 255, 0.28);
                }
                "#}
            </style>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(label: &'static str, category: PartCategory) -> GalleryItem {
        GalleryItem {
            image: "",
            label,
            category,
        }
    }

    #[test]
    fn filter_keeps_exactly_the_matching_subset() {
        let items = [
            item("a", PartCategory::Arm),
            item("b", PartCategory::Joint),
            item("c", PartCategory::Arm),
            item("d", PartCategory::Mount),
        ];
        assert_eq!(
            visible_indices(&items, GalleryFilter::All),
            vec![0, 1, 2, 3]
        );
        assert_eq!(
            visible_indices(&items, GalleryFilter::Category(PartCategory::Arm)),
            vec![0, 2]
        );
        assert_eq!(
            visible_indices(&items, GalleryFilter::Category(PartCategory::Joint)),
            vec![1]
        );
    }

    #[test]
    fn navigation_wraps_in_both_directions() {
        // Sequence [A, B, C] opened at B.
        assert_eq!(step_index(1, 3, 1), Some(2));
        assert_eq!(step_index(2, 3, 1), Some(0));
        assert_eq!(step_index(0, 3, -1), Some(2));
    }

    #[test]
    fn stepping_len_times_returns_to_the_start() {
        let len = 5;
        let mut position = 3;
        for _ in 0..len {
            position = step_index(position, len, 1).unwrap();
        }
        assert_eq!(position, 3);
    }

    #[test]
    fn empty_visible_sequence_is_a_no_op() {
        assert_eq!(step_index(0, 0, 1), None);
        assert_eq!(step_index(0, 0, -1), None);
    }
}
