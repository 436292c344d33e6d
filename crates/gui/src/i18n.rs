use std::sync::atomic::{AtomicU8, Ordering};

use crate::state::settings::Language;

static CURRENT_LANG: AtomicU8 = AtomicU8::new(0); // 0=En (default)

pub fn lang() -> Language {
    match CURRENT_LANG.load(Ordering::Relaxed) {
        1 => Language::Ru,
        _ => Language::En,
    }
}

pub fn set_lang(l: Language) {
    CURRENT_LANG.store(
        match l {
            Language::En => 0,
            Language::Ru => 1,
        },
        Ordering::Relaxed,
    );
}

/// Translate a key to the current language.
pub fn t(key: &str) -> &'static str {
    let ru = lang() == Language::Ru;
    match key {
        // ── Main menus ──────────────────────────────────────
        "menu.file" => if ru { "Файл" } else { "File" },
        "menu.export_png" => if ru { "Экспорт PNG..." } else { "Export PNG..." },
        "menu.export_png_title" => if ru { "Сохранить снимок" } else { "Save Snapshot" },
        "menu.quit" => if ru { "Выход" } else { "Quit" },

        "menu.view" => if ru { "Вид" } else { "View" },
        "menu.parameters" => if ru { "Параметры" } else { "Parameters" },
        "menu.results" => if ru { "Результаты расчёта" } else { "Design results" },
        "menu.grid" => if ru { "Сетка" } else { "Grid" },
        "menu.shadows" => if ru { "Тени" } else { "Shadows" },
        "menu.reset_camera" => if ru { "Сбросить камеру" } else { "Reset camera" },
        "menu.fullscreen" => if ru { "Полный экран  F11" } else { "Fullscreen  F11" },
        "menu.language" => if ru { "Язык" } else { "Language" },

        "menu.settings" => if ru { "Настройки" } else { "Settings" },
        "menu.preferences" => if ru { "Параметры вида..." } else { "Preferences..." },

        // ── Settings window ─────────────────────────────────
        "settings.title" => if ru { "Настройки" } else { "Settings" },
        "settings.grid" => if ru { "Сетка" } else { "Grid" },
        "settings.grid_visible" => if ru { "Показывать сетку" } else { "Show grid" },
        "settings.grid_size" => if ru { "Размер" } else { "Size" },
        "settings.grid_divisions" => if ru { "Число делений" } else { "Divisions" },
        "settings.grid_opacity" => if ru { "Прозрачность" } else { "Opacity" },
        "settings.lighting" => if ru { "Освещение" } else { "Lighting" },
        "settings.ambient" => if ru { "Рассеянный свет" } else { "Ambient" },
        "settings.directional" => if ru { "Направленный свет" } else { "Directional" },
        "settings.shadows" => if ru { "Отбрасывать тени" } else { "Cast shadows" },
        "settings.rotation" => if ru { "Вращение" } else { "Rotation" },
        "settings.rotation_step" => if ru { "Шаг за кадр" } else { "Step per frame" },
        "settings.camera" => if ru { "Камера" } else { "Camera" },
        "settings.min_distance" => if ru { "Мин. расстояние" } else { "Min distance" },
        "settings.max_distance" => if ru { "Макс. расстояние" } else { "Max distance" },
        "settings.fov" => if ru { "Угол обзора" } else { "Field of view" },
        "settings.viewport" => if ru { "Вьюпорт" } else { "Viewport" },
        "settings.bg_color" => if ru { "Цвет фона" } else { "Background color" },
        "settings.ui" => if ru { "Интерфейс" } else { "Interface" },
        "settings.font_size" => if ru { "Размер шрифта" } else { "Font size" },
        "settings.apply" => if ru { "Применить" } else { "Apply" },
        "settings.reset" => if ru { "Сбросить" } else { "Reset" },
        "settings.close" => if ru { "Закрыть" } else { "Close" },

        // ── Toolbar ─────────────────────────────────────────
        "tb.stop_rotation" => if ru { "Остановить вращение" } else { "Stop Rotation" },
        "tb.start_rotation" => if ru { "Запустить вращение" } else { "Start Rotation" },
        "tb.fullscreen" => if ru { "Полный экран" } else { "Fullscreen" },
        "tb.exit_fullscreen" => if ru { "Выйти из полноэкранного режима" } else { "Exit Fullscreen" },
        "tb.export" => if ru { "Экспорт изображения" } else { "Export Image" },

        "tip.rotation" => if ru { "Вращение сборки вокруг вертикальной оси  R" } else { "Spin the assembly about the vertical axis  R" },
        "tip.fullscreen" => if ru { "Переключить полноэкранный режим  F11" } else { "Toggle fullscreen  F11" },
        "tip.export" => if ru { "Сохранить текущий вид в PNG  Ctrl+S" } else { "Save the current view as PNG  Ctrl+S" },
        "tip.export_disabled" => if ru { "Доступно после первого кадра" } else { "Available after the first frame" },

        // ── Parameters panel ────────────────────────────────
        "params.title" => if ru { "Параметры стыка" } else { "Splice parameters" },
        "params.flange_width" => if ru { "Ширина полки" } else { "Flange width" },
        "params.web_height" => if ru { "Высота стенки" } else { "Web height" },
        "params.flange_thickness" => if ru { "Толщина полки" } else { "Flange thickness" },
        "params.web_thickness" => if ru { "Толщина стенки" } else { "Web thickness" },
        "params.bolt_diameter" => if ru { "Диаметр болта" } else { "Bolt diameter" },
        "params.bolt_type" => if ru { "Тип болта" } else { "Bolt type" },
        "params.property_class" => if ru { "Класс прочности" } else { "Property class" },
        "params.reset" => if ru { "Сбросить" } else { "Reset" },

        // ── Results panel ───────────────────────────────────
        "results.title" => if ru { "Результаты расчёта" } else { "Design results" },
        "results.none" => if ru { "Нет данных расчёта" } else { "No design result loaded" },
        "results.section" => if ru { "Сечение" } else { "Section" },
        "results.material" => if ru { "Материал" } else { "Material" },
        "results.weld_type" => if ru { "Тип шва" } else { "Weld type" },
        "results.flange_preference" => if ru { "Расположение накладок" } else { "Flange plates" },
        "results.status" => if ru { "Статус" } else { "Status" },
        "results.safe" => if ru { "НАДЁЖНО" } else { "SAFE" },
        "results.unsafe" => if ru { "НЕНАДЁЖНО" } else { "UNSAFE" },
        "results.bending_moment" => if ru { "Изгибающий момент" } else { "Bending moment" },
        "results.shear_force" => if ru { "Поперечная сила" } else { "Shear force" },
        "results.axial_force" => if ru { "Продольная сила" } else { "Axial force" },
        "results.flange_thickness" => if ru { "Толщина полки" } else { "Flange thickness" },
        "results.web_thickness" => if ru { "Толщина стенки" } else { "Web thickness" },
        "results.member_capacity" => if ru { "Несущая способность" } else { "Member capacity" },
        "results.flange_plate_thickness" => if ru { "Толщина накладки полки" } else { "Flange plate thickness" },
        "results.web_plate_thickness" => if ru { "Толщина накладки стенки" } else { "Web plate thickness" },
        "results.weld_strength" => if ru { "Прочность шва" } else { "Weld strength" },

        // ── Viewport ────────────────────────────────────────
        "viewport.unavailable" => if ru { "3D-вид недоступен" } else { "3D view unavailable" },
        "viewport.invalid_params" => if ru { "Недопустимые параметры" } else { "Invalid parameters" },
        "viewport.nav_hint" => if ru { "ЛКМ: вращение  ПКМ: сдвиг  Колесо: масштаб  Двойной щелчок: сброс" } else { "LMB: orbit  RMB: pan  Wheel: zoom  Double-click: reset" },

        // ── Status bar ──────────────────────────────────────
        "status.rotating" => if ru { "Вращение" } else { "Rotating" },
        "status.stopped" => if ru { "Остановлено" } else { "Stopped" },
        "status.hover" => if ru { "Деталь" } else { "Part" },
        "status.exported" => if ru { "Снимок сохранён" } else { "Snapshot saved" },
        "status.export_failed" => if ru { "Ошибка экспорта" } else { "Export failed" },
        "status.capture_timeout" => if ru { "Снимок не получен, повторите экспорт" } else { "No snapshot received, try exporting again" },

        // ── Fallback ────────────────────────────────────────
        _ => "???",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_switch_language() {
        set_lang(Language::Ru);
        assert_eq!(t("tb.export"), "Экспорт изображения");
        set_lang(Language::En);
        assert_eq!(t("tb.export"), "Export Image");
        assert_eq!(t("no.such.key"), "???");
    }
}
