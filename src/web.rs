//! Browser front end: draws a field on an HTML canvas and feeds it window
//! and mouse events.

use std::{cell::RefCell, rc::Rc};

use wasm_bindgen::{prelude::*, JsCast};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, MouseEvent, Window};

use crate::{
    field::ParticleField,
    motion::Variant,
    style::Paint,
    surface::Surface,
    Float,
};

/// [`Surface`] backed by a 2D canvas context.
pub struct CanvasSurface {
    context: CanvasRenderingContext2d,
}

impl CanvasSurface {
    pub fn new(context: CanvasRenderingContext2d) -> Self {
        Self { context }
    }

    fn to_js(&self, paint: &Paint) -> JsValue {
        match paint {
            Paint::Solid(color) => JsValue::from_str(&color.to_css()),
            Paint::Gradient(gradient) => {
                let canvas_gradient = self.context.create_linear_gradient(
                    gradient.start.x,
                    gradient.start.y,
                    gradient.end.x,
                    gradient.end.y,
                );
                for stop in &gradient.stops {
                    // offsets outside [0, 1] are rejected by the canvas and ignored
                    let _ = canvas_gradient.add_color_stop(stop.offset as f32, &stop.color.to_css());
                }
                canvas_gradient.into()
            }
        }
    }
}

impl Surface for CanvasSurface {
    fn clear_rect(&mut self, x: Float, y: Float, width: Float, height: Float) {
        self.context.clear_rect(x, y, width, height);
    }

    fn begin_path(&mut self) {
        self.context.begin_path();
    }

    fn move_to(&mut self, x: Float, y: Float) {
        self.context.move_to(x, y);
    }

    fn line_to(&mut self, x: Float, y: Float) {
        self.context.line_to(x, y);
    }

    fn arc(&mut self, x: Float, y: Float, radius: Float, start_angle: Float, end_angle: Float) {
        // only fails for a negative radius
        let _ = self.context.arc(x, y, radius, start_angle, end_angle);
    }

    fn fill(&mut self) {
        self.context.fill();
    }

    fn stroke(&mut self) {
        self.context.stroke();
    }

    fn save(&mut self) {
        self.context.save();
    }

    fn restore(&mut self) {
        self.context.restore();
    }

    fn set_global_alpha(&mut self, alpha: Float) {
        self.context.set_global_alpha(alpha);
    }

    #[allow(deprecated)]
    fn set_fill_style(&mut self, paint: &Paint) {
        let style = self.to_js(paint);
        self.context.set_fill_style(&style);
    }

    #[allow(deprecated)]
    fn set_stroke_style(&mut self, paint: &Paint) {
        let style = self.to_js(paint);
        self.context.set_stroke_style(&style);
    }
}

struct App {
    field: ParticleField<Variant>,
    surface: CanvasSurface,
    canvas: HtmlCanvasElement,
}

impl App {
    fn resize(&mut self, width: Float, height: Float) {
        self.canvas.set_width(width as u32);
        self.canvas.set_height(height as u32);
        self.field.resize(width, height);
        // resizing the canvas resets the context state
        let theme = *self.field.theme();
        theme.apply(&mut self.surface, width, height);
    }

    fn frame(&mut self) {
        self.field.frame(&mut self.surface);
    }
}

fn window() -> Result<Window, JsValue> {
    web_sys::window().ok_or_else(|| JsValue::from_str("no global window"))
}

fn inner_size(window: &Window) -> Result<(Float, Float), JsValue> {
    let width = window.inner_width()?.as_f64().unwrap_or(0.);
    let height = window.inner_height()?.as_f64().unwrap_or(0.);
    Ok((width, height))
}

fn request_animation_frame(window: &Window, f: &Closure<dyn FnMut()>) -> Result<i32, JsValue> {
    window.request_animation_frame(f.as_ref().unchecked_ref())
}

fn add_mouse_listener(
    window: &Window,
    event: &str,
    app: &Rc<RefCell<App>>,
    handler: fn(&mut App, &MouseEvent),
) -> Result<(), JsValue> {
    let app = Rc::clone(app);
    let closure = Closure::<dyn FnMut(MouseEvent)>::new(move |e: MouseEvent| {
        handler(&mut app.borrow_mut(), &e);
    });
    window.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;
    // the listeners live as long as the page
    closure.forget();
    Ok(())
}

/// Fill the window with the canvas `canvas_id` and animate `variant` on it.
///
/// `variant` is one of `drift`, `pull` or `push`.
#[wasm_bindgen]
pub fn start(canvas_id: &str, variant: &str) -> Result<(), JsValue> {
    let variant: Variant = variant
        .parse()
        .map_err(|e: crate::motion::ParseVariantError| JsValue::from_str(&e.to_string()))?;

    let window = window()?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))?;
    let canvas: HtmlCanvasElement = document
        .get_element_by_id(canvas_id)
        .ok_or_else(|| JsValue::from_str(&format!("no element with id {canvas_id:?}")))?
        .dyn_into()?;
    let context: CanvasRenderingContext2d = canvas
        .get_context("2d")?
        .ok_or_else(|| JsValue::from_str("canvas has no 2d context"))?
        .dyn_into()?;

    let (width, height) = inner_size(&window)?;
    canvas.set_width(width as u32);
    canvas.set_height(height as u32);

    let config = variant.config();
    let mut surface = CanvasSurface::new(context);
    config.theme.apply(&mut surface, width, height);

    let app = Rc::new(RefCell::new(App {
        field: ParticleField::new(width, height, config, variant),
        surface,
        canvas,
    }));

    {
        let app = Rc::clone(&app);
        let listener_window = window.clone();
        let closure = Closure::<dyn FnMut()>::new(move || {
            if let Ok((width, height)) = inner_size(&listener_window) {
                app.borrow_mut().resize(width, height);
            }
        });
        window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref())?;
        closure.forget();
    }

    add_mouse_listener(&window, "mousemove", &app, |app, e| {
        app.field
            .pointer_moved(Float::from(e.client_x()), Float::from(e.client_y()));
    })?;
    add_mouse_listener(&window, "mousedown", &app, |app, e| {
        app.field
            .pointer_down(Float::from(e.client_x()), Float::from(e.client_y()));
    })?;
    add_mouse_listener(&window, "mouseup", &app, |app, _| app.field.pointer_up())?;

    // the loop keeps a handle to its own closure to reschedule itself
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let first_tick = Rc::clone(&tick);
    let loop_window = window.clone();
    *first_tick.borrow_mut() = Some(Closure::<dyn FnMut()>::new(move || {
        app.borrow_mut().frame();
        if let Some(f) = tick.borrow().as_ref() {
            let _ = request_animation_frame(&loop_window, f);
        }
    }));

    if let Some(f) = first_tick.borrow().as_ref() {
        request_animation_frame(&window, f)?;
    }

    web_sys::console::log_1(
        &format!("particle field: {variant} with {} particles", config.num_particles).into(),
    );

    Ok(())
}
