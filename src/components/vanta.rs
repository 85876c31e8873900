use js_sys::Reflect;
use log::warn;
use serde::Serialize;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use yew::prelude::*;

use crate::config;

#[wasm_bindgen]
extern "C" {
    // Provided by the Vanta CDN bundle loaded in index.html.
    #[wasm_bindgen(js_namespace = VANTA, js_name = NET, catch)]
    fn vanta_net(options: JsValue) -> Result<JsValue, JsValue>;
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct NetOptions<'a> {
    el: &'a str,
    mouse_controls: bool,
    touch_controls: bool,
    gyro_controls: bool,
    min_height: f64,
    min_width: f64,
    scale: f64,
    scale_mobile: f64,
    color: u32,
    background_color: u32,
    points: f64,
    max_distance: f64,
    spacing: f64,
}

#[derive(Properties, PartialEq)]
pub struct VantaBackgroundProps {
    /// Element id the effect mounts onto.
    pub mount_id: AttrValue,
}

/// Decorative animated net behind the hero. Configured once on mount and
/// opaque afterwards; if the CDN script never loaded the hero simply
/// renders without it.
#[function_component(VantaBackground)]
pub fn vanta_background(props: &VantaBackgroundProps) -> Html {
    let mount_id = props.mount_id.clone();

    use_effect_with_deps(
        move |_| {
            let selector = format!("#{}", mount_id);
            let options = NetOptions {
                el: &selector,
                mouse_controls: true,
                touch_controls: true,
                gyro_controls: false,
                min_height: 200.0,
                min_width: 200.0,
                scale: 1.0,
                scale_mobile: 1.0,
                color: config::VANTA_COLOR,
                background_color: config::VANTA_BACKGROUND_COLOR,
                points: config::VANTA_POINTS,
                max_distance: config::VANTA_MAX_DISTANCE,
                spacing: config::VANTA_SPACING,
            };

            let instance = serde_wasm_bindgen::to_value(&options)
                .map_err(JsValue::from)
                .and_then(vanta_net)
                .map_err(|_| warn!("Vanta effect unavailable, hero renders without animation"))
                .ok();

            move || {
                if let Some(instance) = instance {
                    if let Ok(destroy) = Reflect::get(&instance, &JsValue::from_str("destroy")) {
                        if let Ok(destroy) = destroy.dyn_into::<js_sys::Function>() {
                            let _ = destroy.call0(&instance);
                        }
                    }
                }
            }
        },
        (),
    );

    html! {
        <div id={props.mount_id.clone()} class="vanta-background"></div>
    }
}
